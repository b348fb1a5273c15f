use crate::api::ShiftBackend;
use crate::libs::{messages::Message, view::View};
use crate::msg_print;
use anyhow::Result;

/// Lists stores in store order (`Tienda 2` before `Tienda 10`).
pub async fn cmd<B: ShiftBackend>(backend: &B) -> Result<()> {
    let stores = backend.list_stores().await?;
    msg_print!(Message::StoresHeader, true);
    View::stores(&stores)
}
