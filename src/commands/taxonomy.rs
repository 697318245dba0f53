use anyhow::Result;

use super::Session;
use crate::ui::json::{emit_event, DataEvent};
use crate::ui::views::taxonomy::TaxonomyListing;

pub fn cmd_taxonomy(session: &Session) -> Result<()> {
    let taxonomy = session.config.taxonomy()?;
    let listing = TaxonomyListing::from_taxonomy(&taxonomy);

    if session.ui.json {
        emit_event(&DataEvent::new("taxonomy", &listing))?;
    } else {
        print!("{}", listing.render(&session.ui));
    }
    Ok(())
}
