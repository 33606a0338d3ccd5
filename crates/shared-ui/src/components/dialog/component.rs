use dioxus::prelude::*;

/// A centered modal overlay. Renders nothing while closed; clicking the
/// backdrop closes it, clicks inside the panel do not propagate out.
#[component]
pub fn Dialog(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "dialog-overlay",
            "data-open": "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "dialog-panel",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Header section of a Dialog.
#[component]
pub fn DialogHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "dialog-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Title element within a DialogHeader.
#[component]
pub fn DialogTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "dialog-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h2 {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        fn app() -> Element {
            rsx! {
                Dialog { open: false, on_close: move |_| {},
                    DialogTitle { "Login" }
                }
            }
        }

        let html = render(app);
        assert_eq!(html, "");
    }

    #[test]
    fn open_dialog_renders_panel_and_children() {
        fn app() -> Element {
            rsx! {
                Dialog { open: true, on_close: move |_| {},
                    DialogHeader {
                        DialogTitle { "Login" }
                    }
                }
            }
        }

        let html = render(app);
        assert!(html.contains("dialog-panel"), "{html}");
        assert!(html.contains("Login"), "{html}");
    }
}
