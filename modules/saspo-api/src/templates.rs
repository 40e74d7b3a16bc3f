use dioxus::prelude::VirtualDom;

/// Run the first render of `dom` and wrap the output in a full HTML document.
pub fn render_page(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus::ssr::render(&dom)
    )
}
