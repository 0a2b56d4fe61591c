use crate::commands::CmdResult;
use crate::config::Settings;
use crate::error::Result;
use crate::records::RecordStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    #[default]
    Oldest,
    Newest,
}

pub fn run(settings: &Settings, order: ListOrder, limit: Option<usize>) -> Result<CmdResult> {
    let mut entries = RecordStore::from_settings(settings).entries()?;
    if order == ListOrder::Newest {
        entries.reverse();
    }
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    Ok(CmdResult::default().with_entries(entries))
}
