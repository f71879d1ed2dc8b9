//! Card state: the single source of truth for one identity card.
//!
//! Every edit produces a new [`CardState`] with exactly one field replaced.
//! Images are shared through [`ImageRef`], so copying a state never copies
//! image bytes.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rand::Rng;

use crate::error::CardError;
use crate::theme::{Theme, ThemePatch};

/// Text printed on the back of a fresh card.
pub const DEFAULT_INSTRUCTIONS: &str = "1. This card is non-transferable.\n2. In case of loss, report to the college office immediately.\n3. Misuse of this card is a punishable offense.";

/// Embeddable image: a `data:` URI holding the whole file.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(Arc<str>);

impl ImageRef {
    pub fn from_data_uri(uri: impl Into<String>) -> Self {
        Self(Arc::from(uri.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MIME type declared in the URI header, if any.
    pub fn mime(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let end = rest.find([';', ','])?;
        Some(&rest[..end])
    }
}

impl fmt::Debug for ImageRef {
    // Data URIs run to megabytes; keep logs readable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ImageRef({}, {} bytes)",
            self.mime().unwrap_or("?"),
            self.0.len()
        )
    }
}

/// Printed card serial, `SN-` followed by six digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardSerial(String);

impl CardSerial {
    /// Draw a new random serial in `SN-100000..=SN-999999`.
    pub fn generate() -> Self {
        let n: u32 = rand::rng().random_range(100_000..1_000_000);
        Self(format!("SN-{}", n))
    }

    /// Use a caller-chosen serial verbatim.
    pub fn new(serial: impl Into<String>) -> Self {
        Self(serial.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardSerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every free-text field of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    CollegeName,
    CollegeAddress,
    CollegePhone,
    Affiliation,
    StudentId,
    StudentName,
    RollNo,
    Program,
    Dob,
    BloodGroup,
    Address,
    Mobile,
    ExpiryDate,
    Instructions,
    EmergencyContact,
    Website,
}

impl CardField {
    pub const ALL: [CardField; 16] = [
        CardField::CollegeName,
        CardField::CollegeAddress,
        CardField::CollegePhone,
        CardField::Affiliation,
        CardField::StudentId,
        CardField::StudentName,
        CardField::RollNo,
        CardField::Program,
        CardField::Dob,
        CardField::BloodGroup,
        CardField::Address,
        CardField::Mobile,
        CardField::ExpiryDate,
        CardField::Instructions,
        CardField::EmergencyContact,
        CardField::Website,
    ];

    /// snake_case name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            CardField::CollegeName => "college_name",
            CardField::CollegeAddress => "college_address",
            CardField::CollegePhone => "college_phone",
            CardField::Affiliation => "affiliation",
            CardField::StudentId => "student_id",
            CardField::StudentName => "student_name",
            CardField::RollNo => "roll_no",
            CardField::Program => "program",
            CardField::Dob => "dob",
            CardField::BloodGroup => "blood_group",
            CardField::Address => "address",
            CardField::Mobile => "mobile",
            CardField::ExpiryDate => "expiry_date",
            CardField::Instructions => "instructions",
            CardField::EmergencyContact => "emergency_contact",
            CardField::Website => "website",
        }
    }
}

impl FromStr for CardField {
    type Err = CardError;

    /// Accepts `student_name`, `studentName` and `student-name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        CardField::ALL
            .into_iter()
            .find(|field| field.name().replace('_', "") == folded)
            .ok_or_else(|| CardError::UnknownField(s.to_string()))
    }
}

/// The three optional image slots on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Logo,
    Signature,
    Portrait,
}

impl ImageSlot {
    pub fn display_name(&self) -> &'static str {
        match self {
            ImageSlot::Logo => "Institution Logo",
            ImageSlot::Signature => "Signature",
            ImageSlot::Portrait => "Student Portrait",
        }
    }
}

/// All editable values and the palette for one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    // Front side
    pub college_name: String,
    pub college_address: String,
    pub college_phone: String,
    pub affiliation: String,
    pub logo: Option<ImageRef>,
    pub principal_signature: Option<ImageRef>,
    pub student_id: String,
    pub student_name: String,
    pub roll_no: String,
    pub program: String,
    pub dob: String,
    pub blood_group: String,
    pub address: String,
    pub mobile: String,
    pub expiry_date: String,
    pub photo: Option<ImageRef>,

    // Back side
    pub instructions: String,
    pub emergency_contact: String,
    pub card_serial: CardSerial,
    pub website: String,

    pub theme: Theme,
}

impl CardState {
    /// Fresh card with every literal default and the given serial.
    pub fn new(card_serial: CardSerial) -> Self {
        Self {
            college_name: String::new(),
            college_address: String::new(),
            college_phone: String::new(),
            affiliation: String::new(),
            logo: None,
            principal_signature: None,
            student_id: String::new(),
            student_name: String::new(),
            roll_no: String::new(),
            program: String::new(),
            dob: String::new(),
            blood_group: String::new(),
            address: String::new(),
            mobile: String::new(),
            expiry_date: String::new(),
            photo: None,
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            emergency_contact: String::new(),
            card_serial,
            website: String::new(),
            theme: Theme::default(),
        }
    }

    pub fn field(&self, field: CardField) -> &str {
        match field {
            CardField::CollegeName => &self.college_name,
            CardField::CollegeAddress => &self.college_address,
            CardField::CollegePhone => &self.college_phone,
            CardField::Affiliation => &self.affiliation,
            CardField::StudentId => &self.student_id,
            CardField::StudentName => &self.student_name,
            CardField::RollNo => &self.roll_no,
            CardField::Program => &self.program,
            CardField::Dob => &self.dob,
            CardField::BloodGroup => &self.blood_group,
            CardField::Address => &self.address,
            CardField::Mobile => &self.mobile,
            CardField::ExpiryDate => &self.expiry_date,
            CardField::Instructions => &self.instructions,
            CardField::EmergencyContact => &self.emergency_contact,
            CardField::Website => &self.website,
        }
    }

    fn field_mut(&mut self, field: CardField) -> &mut String {
        match field {
            CardField::CollegeName => &mut self.college_name,
            CardField::CollegeAddress => &mut self.college_address,
            CardField::CollegePhone => &mut self.college_phone,
            CardField::Affiliation => &mut self.affiliation,
            CardField::StudentId => &mut self.student_id,
            CardField::StudentName => &mut self.student_name,
            CardField::RollNo => &mut self.roll_no,
            CardField::Program => &mut self.program,
            CardField::Dob => &mut self.dob,
            CardField::BloodGroup => &mut self.blood_group,
            CardField::Address => &mut self.address,
            CardField::Mobile => &mut self.mobile,
            CardField::ExpiryDate => &mut self.expiry_date,
            CardField::Instructions => &mut self.instructions,
            CardField::EmergencyContact => &mut self.emergency_contact,
            CardField::Website => &mut self.website,
        }
    }

    /// Replace one text field in place. Any string is accepted.
    pub fn set_field(&mut self, field: CardField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Copy of this state with one text field replaced.
    pub fn with_field(&self, field: CardField, value: impl Into<String>) -> CardState {
        let mut next = self.clone();
        next.set_field(field, value);
        next
    }

    pub fn image(&self, slot: ImageSlot) -> Option<&ImageRef> {
        match slot {
            ImageSlot::Logo => self.logo.as_ref(),
            ImageSlot::Signature => self.principal_signature.as_ref(),
            ImageSlot::Portrait => self.photo.as_ref(),
        }
    }

    pub fn set_image(&mut self, slot: ImageSlot, image: Option<ImageRef>) {
        let target = match slot {
            ImageSlot::Logo => &mut self.logo,
            ImageSlot::Signature => &mut self.principal_signature,
            ImageSlot::Portrait => &mut self.photo,
        };
        *target = image;
    }

    /// Copy of this state with one image slot set or cleared.
    pub fn with_image(&self, slot: ImageSlot, image: Option<ImageRef>) -> CardState {
        let mut next = self.clone();
        next.set_image(slot, image);
        next
    }

    /// Copy of this state with the palette merged with `patch`.
    pub fn with_theme(&self, patch: ThemePatch) -> CardState {
        CardState {
            theme: self.theme.merged(patch),
            ..self.clone()
        }
    }
}

/// Factory for the default card of one session.
///
/// The serial is drawn once; every [`build`](CardDefaults::build) returns a
/// brand-new state carrying that same serial, so resetting the editor
/// restores the exact startup card without sharing any storage with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDefaults {
    serial: CardSerial,
}

impl CardDefaults {
    /// Defaults with a freshly generated serial.
    pub fn fresh() -> Self {
        Self::with_serial(CardSerial::generate())
    }

    pub fn with_serial(serial: CardSerial) -> Self {
        Self { serial }
    }

    pub fn serial(&self) -> &CardSerial {
        &self.serial
    }

    pub fn build(&self) -> CardState {
        CardState::new(self.serial.clone())
    }
}
