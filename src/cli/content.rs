use anyhow::Result;

use crate::content::Section;

pub fn run(section: Section) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&section.to_json())?);
    Ok(())
}
