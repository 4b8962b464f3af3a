use yew::{html, Callback, Html};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Input,
    Validation,
    Users,
    Claims,
}

impl View {
    pub const NAV: [View; 5] = [
        View::Dashboard,
        View::Input,
        View::Validation,
        View::Users,
        View::Claims,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Input => "Input Data Lapangan",
            View::Validation => "Validasi & Verifikasi",
            View::Users => "Manajemen Pengguna",
            View::Claims => "Klaim Asuransi",
        }
    }
}

/// Page chrome: header, navigation bar, content and footer.
pub fn layout(current: View, on_navigate: &Callback<View>, content: Html) -> Html {
    html! {
        <div class="app">
            <header class="app-header">
                <div class="brand">
                    <span class="brand-mark">{"🐟"}</span>
                    <div>
                        <h1>{"SIAP LAPOR"}</h1>
                        <p class="muted">{"Sistem Informasi dan Aplikasi Pelaporan Perikanan"}</p>
                    </div>
                </div>
                <div class="office">{"Dinas Kelautan dan Perikanan Kabupaten Kebumen"}</div>
            </header>
            <nav class="app-nav">
                {
                    for View::NAV.iter().map(|&view| {
                        let class = if view == current { "nav-item active" } else { "nav-item" };
                        let onclick = on_navigate.reform(move |_| view);
                        html! { <button {class} {onclick}>{ view.label() }</button> }
                    })
                }
            </nav>
            <main class="app-main">{ content }</main>
            <footer class="app-footer">
                <p>{"© 2025 Dinas Kelautan dan Perikanan Kabupaten Kebumen. All rights reserved."}</p>
            </footer>
        </div>
    }
}
