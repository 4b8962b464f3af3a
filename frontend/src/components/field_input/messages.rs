use common::forms::field_entry::FieldEdit;

pub enum Msg {
    Edit(FieldEdit),
    Submit,
}
