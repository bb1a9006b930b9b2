use crate::domain::model::Vacancy;
use crate::utils::error::Result;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

const OUTPUT_FILENAME: &str = "vacancies.xml";
const COMPANY_NAME: &str = "Exone";
const FALLBACK_CONTACT_EMAIL: &str = "fallback@jobufo.com";

/// Serializes enriched vacancies into the feed schema.
///
/// The element names, nesting and order are a hard contract with the
/// downstream application agent; do not reorder or rename anything here
/// without coordinating with that consumer.
pub struct XmlExporter {
    output_dir: PathBuf,
    kind_map: HashMap<String, String>,
}

impl XmlExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        let kind_map = HashMap::from([
            ("Vollzeit".to_string(), "FULL_TIME".to_string()),
            ("Teilzeit".to_string(), "PART_TIME".to_string()),
        ]);
        Self {
            output_dir: output_dir.into(),
            kind_map,
        }
    }

    /// Renders and writes the feed, creating the output directory if
    /// missing. Returns the written file's path.
    pub fn export(&self, vacancies: &[Vacancy]) -> Result<PathBuf> {
        let xml = self.render(vacancies)?;

        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(OUTPUT_FILENAME);
        fs::write(&path, &xml)?;

        tracing::debug!("Wrote {} bytes to {}", xml.len(), path.display());
        Ok(path)
    }

    fn render(&self, vacancies: &[Vacancy]) -> Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new("vacancies")))?;
        for vacancy in vacancies {
            self.write_position(&mut writer, vacancy)?;
        }
        writer.write_event(Event::End(BytesEnd::new("vacancies")))?;

        Ok(writer.into_inner())
    }

    fn write_position(&self, writer: &mut Writer<Vec<u8>>, vacancy: &Vacancy) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("position")))?;

        write_text_element(writer, "link", &vacancy.url)?;
        write_text_element(writer, "identifier", &vacancy.id)?;
        write_text_element(writer, "title", &vacancy.title)?;
        write_empty_element(writer, "start_date")?;

        match self.kind_map.get(&vacancy.kind) {
            Some(kind) => write_text_element(writer, "kind", kind)?,
            None => {
                tracing::info!("Can't get kind of vacancy '{}'", vacancy.kind);
                write_empty_element(writer, "kind")?;
            }
        }

        // The consumer expects the description as literal character data.
        writer.write_event(Event::Start(BytesStart::new("description")))?;
        writer.write_event(Event::CData(BytesCData::new(
            vacancy.description.as_deref().unwrap_or_default(),
        )))?;
        writer.write_event(Event::End(BytesEnd::new("description")))?;

        write_text_element(writer, "top_location", vacancy.top_location())?;

        writer.write_event(Event::Start(BytesStart::new("locations")))?;
        match vacancy.sub_location() {
            Some(sub_location) => write_text_element(writer, "location", sub_location)?,
            None => write_empty_element(writer, "location")?,
        }
        writer.write_event(Event::End(BytesEnd::new("locations")))?;

        write_empty_element(writer, "images")?;

        writer.write_event(Event::Start(BytesStart::new("company")))?;
        write_text_element(writer, "name", COMPANY_NAME)?;
        writer.write_event(Event::Start(BytesStart::new("address")))?;
        write_empty_element(writer, "street")?;
        write_empty_element(writer, "zip")?;
        write_text_element(writer, "city", vacancy.top_location())?;
        writer.write_event(Event::End(BytesEnd::new("address")))?;
        writer.write_event(Event::End(BytesEnd::new("company")))?;

        write_text_element(writer, "contact_email", FALLBACK_CONTACT_EMAIL)?;

        writer.write_event(Event::End(BytesEnd::new("position")))?;
        Ok(())
    }
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    // The feed serializes empty values as self-closing elements.
    if text.is_empty() {
        return write_empty_element(writer, name);
    }
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_empty_element(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<()> {
    writer.write_event(Event::Empty(BytesStart::new(name)))?;
    Ok(())
}
