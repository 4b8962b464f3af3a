//! Monitoring dashboard: KPI cards, quick actions and production charts.

use common::dashboard::{
    production_by_sub_district, series_max, weekly_production, ExportFormat, Kpis, SeriesPoint,
};
use gloo_console::log;
use yew::prelude::*;

use crate::format::{percent_change, thousands};
use crate::toast;

pub struct Dashboard;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    /// Records currently waiting in the validation queue.
    pub pending: usize,
    pub on_navigate_input: Callback<()>,
}

pub enum Msg {
    Export(ExportFormat),
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Export(format) => {
                log!(format!("export {} requested", format.key()));
                toast::alert(&format.export_message());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let kpis = Kpis::with_pending(props.pending);
        let to_input = props.on_navigate_input.reform(|_| ());

        html! {
            <div class="page dashboard">
                <div class="page-header">
                    <h2>{"Dashboard Laporan & Monitoring"}</h2>
                    <p class="muted">{"Ringkasan data produksi perikanan Kabupaten Kebumen"}</p>
                </div>

                <div class="grid-3">
                    { kpi_card("kpi-cyan", "Total Produksi Tahunan",
                        format!("{} Kg", thousands(kpis.annual_production_kg)),
                        format!("{} dari tahun lalu", percent_change(kpis.growth_percent))) }
                    { kpi_card("kpi-emerald", "Data Tervalidasi",
                        thousands(kpis.validated_records),
                        "Record data terverifikasi".to_string()) }
                    { kpi_card("kpi-amber", "Menunggu Validasi",
                        thousands(kpis.pending_records as u64),
                        "Record perlu divalidasi".to_string()) }
                </div>

                <section class="card">
                    <h3>{"Aksi Cepat"}</h3>
                    <p class="muted">{"Akses cepat ke fungsi utama sistem"}</p>
                    <div class="actions">
                        <button class="btn btn-primary" onclick={to_input}>{"+ Input Data Lapangan"}</button>
                        <button class="btn btn-outline" onclick={link.callback(|_| Msg::Export(ExportFormat::Pdf))}>
                            {"Ekspor Laporan (PDF)"}
                        </button>
                        <button class="btn btn-outline" onclick={link.callback(|_| Msg::Export(ExportFormat::Excel))}>
                            {"Ekspor Laporan (Excel)"}
                        </button>
                    </div>
                </section>

                <div class="grid-2">
                    { chart("Tren Produksi Mingguan", "Data produksi 8 minggu terakhir (dalam Kg)", &weekly_production()) }
                    { chart("Produksi per Kecamatan", "Total produksi berdasarkan wilayah (dalam Kg)", &production_by_sub_district()) }
                </div>
            </div>
        }
    }
}

fn kpi_card(accent: &'static str, title: &'static str, value: String, caption: String) -> Html {
    html! {
        <div class={classes!("card", "kpi", accent)}>
            <p class="muted">{ title }</p>
            <div class="kpi-value">{ value }</div>
            <p class="kpi-caption">{ caption }</p>
        </div>
    }
}

/// Horizontal bars scaled to the largest point of the series.
fn chart(title: &'static str, description: &'static str, points: &[SeriesPoint]) -> Html {
    let max = series_max(points);
    html! {
        <section class="card chart">
            <h3>{ title }</h3>
            <p class="muted">{ description }</p>
            <ul class="bars">
                {
                    for points.iter().map(|p| {
                        let width = format!("width: {:.1}%", p.value as f64 * 100.0 / max as f64);
                        html! {
                            <li class="bar-row">
                                <span class="bar-label">{ &p.label }</span>
                                <span class="bar" style={width}></span>
                                <span class="bar-value">{ thousands(p.value) }</span>
                            </li>
                        }
                    })
                }
            </ul>
        </section>
    }
}
