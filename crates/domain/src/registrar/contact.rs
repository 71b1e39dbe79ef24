//! Contact records.

use std::fmt;

use crate::value::{Struct, Value};

/// Telephone and fax country-code index the registrar expects by default.
const DEFAULT_PHONE_CODE: u32 = 2;

/// Role a contact plays for a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactType {
    /// Legal holder of the domain.
    Registrant,
    /// Administrative contact.
    Admin,
    /// Technical contact.
    Tech,
    /// Billing contact.
    Billing,
}

impl ContactType {
    /// All roles, in the order the registrar expects them.
    pub const ALL: [Self; 4] = [Self::Registrant, Self::Admin, Self::Tech, Self::Billing];

    /// Returns the wire name of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Registrant => "registrant",
            Self::Admin => "admin",
            Self::Tech => "tech",
            Self::Billing => "billing",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal and telephone details of a person or organisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    /// Full name.
    pub name: String,
    /// Organisation.
    pub org: String,
    /// Up to three street address lines.
    pub address: [String; 3],
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Country.
    pub country: String,
    /// Postal code.
    pub postal_code: String,
    /// Telephone country-code index.
    pub telephone_code: u32,
    /// Telephone number.
    pub telephone: String,
    /// Fax country-code index.
    pub fax_code: u32,
    /// Fax number.
    pub fax: String,
    /// E-mail address.
    pub email: String,
}

impl ContactInfo {
    /// Creates details with only a name and e-mail set.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            org: String::new(),
            address: [String::new(), String::new(), String::new()],
            city: String::new(),
            state: String::new(),
            country: String::new(),
            postal_code: String::new(),
            telephone_code: DEFAULT_PHONE_CODE,
            telephone: String::new(),
            fax_code: DEFAULT_PHONE_CODE,
            fax: String::new(),
            email: String::new(),
        }
    }
}

/// One contact of a domain in a given role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    /// Role of this contact.
    pub contact_type: ContactType,
    /// Postal and telephone details.
    pub info: ContactInfo,
}

impl ContactDetails {
    /// Builds the `contact_*` record for `domain_name`.
    #[must_use]
    pub fn to_record(&self, domain_name: &str) -> Value {
        let info = &self.info;
        let [address1, address2, address3] = &info.address;
        let mut record = Struct::new();
        let mut put = |name: &str, value: &str| {
            record.insert(name.to_owned(), Value::from(value));
        };
        put("domain_name", domain_name);
        put("contact_type", self.contact_type.as_str());
        put("contact_name", &info.name);
        put("contact_org", &info.org);
        put("contact_address1", address1);
        put("contact_address2", address2);
        put("contact_address3", address3);
        put("contact_city", &info.city);
        put("contact_state", &info.state);
        put("contact_country", &info.country);
        put("contact_postalcode", &info.postal_code);
        put("contact_telephone_code", &info.telephone_code.to_string());
        put("contact_telephone", &info.telephone);
        put("contact_fax_code", &info.fax_code.to_string());
        put("contact_fax", &info.fax);
        put("contact_email", &info.email);
        Value::Struct(record)
    }
}

/// The four contacts of a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSet {
    /// Domain the contacts belong to.
    pub domain_name: String,
    /// Registrant details.
    pub registrant: ContactInfo,
    /// Administrative contact details.
    pub admin: ContactInfo,
    /// Technical contact details.
    pub tech: ContactInfo,
    /// Billing contact details.
    pub billing: ContactInfo,
}

impl ContactSet {
    /// Uses the same details for every role.
    #[must_use]
    pub fn uniform(domain_name: impl Into<String>, info: &ContactInfo) -> Self {
        Self {
            domain_name: domain_name.into(),
            registrant: info.clone(),
            admin: info.clone(),
            tech: info.clone(),
            billing: info.clone(),
        }
    }

    /// Returns the details for `role`.
    #[must_use]
    pub const fn get(&self, role: ContactType) -> &ContactInfo {
        match role {
            ContactType::Registrant => &self.registrant,
            ContactType::Admin => &self.admin,
            ContactType::Tech => &self.tech,
            ContactType::Billing => &self.billing,
        }
    }

    /// Builds the four-record list `contact_register` and `contact_modify` take.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Array(
            ContactType::ALL
                .iter()
                .map(|role| {
                    ContactDetails {
                        contact_type: *role,
                        info: self.get(*role).clone(),
                    }
                    .to_record(&self.domain_name)
                })
                .collect(),
        )
    }
}
