use gloo_console::{info, warn};
use yew::prelude::*;

use crate::toast;

use super::messages::Msg;
use super::FieldInput;

pub fn update(component: &mut FieldInput, ctx: &Context<FieldInput>, msg: Msg) -> bool {
    match msg {
        Msg::Edit(edit) => {
            component.form.apply(edit);
            true
        }
        Msg::Submit => match component.form.submit(ctx.props().next_id.clone()) {
            Ok(record) => {
                info!(format!(
                    "{} disimpan: {} {} di {}, {}",
                    record.id,
                    record.quantity,
                    record.unit.label(),
                    record.village,
                    record.sub_district
                ));
                toast::success(
                    "Data berhasil disimpan!",
                    Some("Data lapangan telah tersimpan dan menunggu validasi."),
                );
                ctx.props().on_submit.emit(record);
                true
            }
            Err(err) => {
                warn!(err.to_string());
                false
            }
        },
    }
}
