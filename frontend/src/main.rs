use crate::app::App;

mod app;
mod components;
mod format;
mod layout;
mod toast;
mod top_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
