use serde::Deserialize;
use serde_json::{Map, Value};
use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

/// The fields published for every ticket, in column order.
///
/// The strum serialization is the JSON key read from the tickets file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum TicketField {
    Name,
    Type,
    Status,
    Priority,
    ProductArea,
    Platform,
    Location,
    Submitter,
    Client,
    StartDate,
    LastUpdated,
    PmrNumber,
    PmgNumber,
    CpmNumber,
    FpTicketNumber,
    TicketThreadId,
    Summary,
    Details,
    Activity,
}

impl TicketField {
    pub fn key(&self) -> &'static str {
        self.into()
    }

    /// Column title written to the header row.
    pub fn header(&self) -> &'static str {
        match self {
            TicketField::Name => "Name",
            TicketField::Type => "Type",
            TicketField::Status => "Status",
            TicketField::Priority => "Priority",
            TicketField::ProductArea => "Product Area",
            TicketField::Platform => "Platform",
            TicketField::Location => "Location",
            TicketField::Submitter => "Submitter",
            TicketField::Client => "Client",
            TicketField::StartDate => "Start Date",
            TicketField::LastUpdated => "Last Updated",
            TicketField::PmrNumber => "PMR #",
            TicketField::PmgNumber => "PMG #",
            TicketField::CpmNumber => "CPM #",
            TicketField::FpTicketNumber => "FP Ticket Number",
            TicketField::TicketThreadId => "Ticket Thread ID",
            TicketField::Summary => "Summary",
            TicketField::Details => "Details",
            TicketField::Activity => "Activity",
        }
    }

    pub fn headers() -> Vec<&'static str> {
        TicketField::iter().map(|field| field.header()).collect()
    }
}

/// A support ticket as read from disk: field name to JSON value.
///
/// Unknown keys are kept but never published.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Ticket(Map<String, Value>);

impl Ticket {
    /// Cell value for `field`. Missing fields and `null` are the empty string.
    /// Strings, numbers and booleans pass through untouched so the sheet keeps
    /// their type; arrays and objects become their compact JSON text.
    pub fn cell(&self, field: TicketField) -> Value {
        match self.0.get(field.key()) {
            None | Some(Value::Null) => Value::String(String::new()),
            Some(nested @ (Value::Array(_) | Value::Object(_))) => {
                Value::String(nested.to_string())
            }
            Some(scalar) => scalar.clone(),
        }
    }
}
