use dioxus::prelude::*;

/// Visual tone for badges. Panels map record states onto these: completed
/// work and answered feedback read as `Success`, pending states as
/// `Warning`, high priority as `Destructive`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Warning,
    Success,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Success => "success",
        }
    }
}

/// Inline label for statuses and priorities.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_renders_variant_and_content() {
        fn app() -> Element {
            rsx! {
                Badge { variant: BadgeVariant::Success, "Concluído" }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("data-style=\"success\""), "{html}");
        assert!(html.contains("Concluído"), "{html}");
    }
}
