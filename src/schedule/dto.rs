use super::model::{Event, EventDate, EventStatus};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

// Note: most fields go through the lenient deserializers since the CMS leaves blanks as null
#[derive(Debug, Deserialize)]
pub struct EventResponse {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: ResponseDate,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub time: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub venue: String,
    #[serde(default, deserialize_with = "deserialize_optional_str")]
    pub club: Option<String>,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_image")]
    pub image: Option<String>,
}

impl EventResponse {
    pub fn to_model(&self) -> Event {
        if self.venue.is_empty() {
            warn!(event.id = %self.id, "No venue found (leaving it blank)");
        }

        Event::new(
            self.id.to_string(),
            self.title.to_string(),
            EventDate::new(&self.date.day, &self.date.month, &self.date.year),
            self.time.to_string(),
            self.venue.to_string(),
            self.club.clone(),
            EventStatus::parse(&self.status),
            self.image.clone(),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseDate {
    #[serde(default, deserialize_with = "deserialize_str")]
    pub day: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub month: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub year: String,
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn deserialize_date<'de, D>(d: D) -> Result<ResponseDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::Object(_) => ResponseDate::deserialize(value).unwrap_or_else(|err| {
            warn!("Failed to read event date. Err: {err}");
            ResponseDate::default()
        }),
        _ => ResponseDate::default(),
    })
}

fn deserialize_optional_str<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_str(d)?;

    Ok(Some(value).filter(|v| !v.is_empty()))
}

fn deserialize_id<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match deserialize_str(d)? {
        id if id.is_empty() => Err(de::Error::custom("event id must not be empty")),
        id => Ok(id),
    }
}

/// Accepts either a plain URL or an asset reference object (`{"asset": {"_ref": ...}}`)
fn deserialize_image<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Object(image) => image
            .get("asset")
            .and_then(|asset| asset.get("_ref").or_else(|| asset.get("url")))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    })
}
