use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "rgba(5, 150, 105, 0.95)",
            ToastKind::Error => "rgba(220, 38, 38, 0.95)",
        }
    }
}

pub fn success(title: &str, description: Option<&str>) {
    show_toast(ToastKind::Success, title, description);
}

pub fn error(title: &str, description: Option<&str>) {
    show_toast(ToastKind::Error, title, description);
}

/// Appends a floating notice to `<body>` and removes it after three seconds.
pub fn show_toast(kind: ToastKind, title: &str, description: Option<&str>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    let title_el = document.create_element("strong").ok();
    if let Some(el) = &title_el {
        el.set_text_content(Some(title));
        toast.append_child(el).ok();
    }
    if let Some(text) = description {
        if let Ok(el) = document.create_element("div") {
            el.set_text_content(Some(text));
            toast.append_child(&el).ok();
        }
    }

    let html_toast: HtmlElement = toast.unchecked_into();
    html_toast.set_class_name("toast");
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("right", "20px").ok();
    style.set_property("background", kind.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "6px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
