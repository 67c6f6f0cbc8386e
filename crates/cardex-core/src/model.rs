use serde::{Deserialize, Serialize};
use std::fmt;

/// One column of a contact record, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Company,
    Title,
    Phone,
    Mobile,
    Email,
    Address,
}

impl Field {
    /// All fields in the fixed column order used by the CSV output.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Company,
        Field::Title,
        Field::Phone,
        Field::Mobile,
        Field::Email,
        Field::Address,
    ];

    /// Column title for the CSV header row.
    pub fn header(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Company => "Company",
            Field::Title => "Title",
            Field::Phone => "Phone",
            Field::Mobile => "Mobile",
            Field::Email => "Email",
            Field::Address => "Address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// A closed contact record. Fields that never received a value are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub company: String,
    pub title: String,
    pub phone: String,
    pub mobile: String,
    pub email: String,
    pub address: String,
}

impl Record {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Company => &self.company,
            Field::Title => &self.title,
            Field::Phone => &self.phone,
            Field::Mobile => &self.mobile,
            Field::Email => &self.email,
            Field::Address => &self.address,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Company => &mut self.company,
            Field::Title => &mut self.title,
            Field::Phone => &mut self.phone,
            Field::Mobile => &mut self.mobile,
            Field::Email => &mut self.email,
            Field::Address => &mut self.address,
        }
    }

    /// Field values in column order.
    pub fn values(&self) -> [&str; 7] {
        Field::ALL.map(|field| self.get(field))
    }
}
