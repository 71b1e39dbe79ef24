//! Member account records.

use chrono::{Datelike, NaiveDate};

use crate::value::Value;

use super::ContactInfo;

/// Profile of a member account.
///
/// Member procedures take the profile as positional arguments rather than a
/// struct; [`MemberProfile::to_arguments`] yields them in service order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberProfile {
    /// Postal and telephone details of the account holder.
    pub info: ContactInfo,
}

impl MemberProfile {
    /// Wraps contact details as a member profile.
    #[must_use]
    pub const fn new(info: ContactInfo) -> Self {
        Self { info }
    }

    /// Returns the fourteen profile arguments in service order.
    #[must_use]
    pub fn to_arguments(&self) -> Vec<Value> {
        let info = &self.info;
        let [address1, address2, address3] = &info.address;
        vec![
            Value::from(&info.name),
            Value::from(&info.org),
            Value::from(address1),
            Value::from(address2),
            Value::from(address3),
            Value::from(&info.city),
            Value::from(&info.state),
            Value::from(&info.country),
            Value::from(&info.postal_code),
            Value::from(info.telephone_code),
            Value::from(&info.telephone),
            Value::from(info.fax_code),
            Value::from(&info.fax),
            Value::from(&info.email),
        ]
    }
}

/// Filters and paging for `member_domain_list`.
///
/// Unset filters are sent as empty strings, which the service treats as
/// "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainListQuery {
    /// Earliest registration date.
    pub from: Option<NaiveDate>,
    /// Latest registration date.
    pub to: Option<NaiveDate>,
    /// Substring of the domain name.
    pub domain_name: Option<String>,
    /// Lock state filter.
    pub locking: Option<String>,
    /// Status filter.
    pub status: Option<String>,
    /// Auto-renewal filter.
    pub auto_renewal: Option<String>,
    /// Sort key.
    pub order_by: Option<String>,
    /// Page size.
    pub results_per_page: u32,
    /// One-based page number.
    pub page: u32,
}

impl Default for DomainListQuery {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            domain_name: None,
            locking: None,
            status: None,
            auto_renewal: None,
            order_by: None,
            results_per_page: 20,
            page: 1,
        }
    }
}

impl DomainListQuery {
    /// Returns the thirteen query arguments in service order.
    #[must_use]
    pub fn to_arguments(&self) -> Vec<Value> {
        let mut args = Vec::with_capacity(13);
        for date in [self.from, self.to] {
            match date {
                Some(d) => {
                    args.push(Value::from(d.year()));
                    args.push(Value::from(d.month()));
                    args.push(Value::from(d.day()));
                }
                None => args.extend(std::iter::repeat_n(Value::from(""), 3)),
            }
        }
        for filter in [
            &self.domain_name,
            &self.locking,
            &self.status,
            &self.auto_renewal,
            &self.order_by,
        ] {
            args.push(Value::from(filter.as_deref().unwrap_or_default()));
        }
        args.push(Value::from(self.results_per_page));
        args.push(Value::from(self.page));
        args
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_profile_argument_order() {
        let profile = MemberProfile::new(ContactInfo {
            org: "Example Ltd".to_owned(),
            ..ContactInfo::new("Bob Roe", "bob@example.com")
        });
        let args = profile.to_arguments();
        assert_eq!(args.len(), 14);
        assert_eq!(args[0], Value::from("Bob Roe"));
        assert_eq!(args[1], Value::from("Example Ltd"));
        assert_eq!(args[9], Value::Int(2));
        assert_eq!(args[11], Value::Int(2));
        assert_eq!(args[13], Value::from("bob@example.com"));
    }

    #[test]
    fn test_default_query_sends_blank_filters() {
        let args = DomainListQuery::default().to_arguments();
        assert_eq!(args.len(), 13);
        assert!(args[..11].iter().all(|a| a == &Value::from("")));
        assert_eq!(args[11], Value::Int(20));
        assert_eq!(args[12], Value::Int(1));
    }

    #[test]
    fn test_query_with_window() {
        let query = DomainListQuery {
            from: NaiveDate::from_ymd_opt(2023, 1, 15),
            to: NaiveDate::from_ymd_opt(2023, 12, 31),
            domain_name: Some("example".to_owned()),
            page: 3,
            ..DomainListQuery::default()
        };
        let args = query.to_arguments();
        assert_eq!(&args[..6], &[
            Value::Int(2023),
            Value::Int(1),
            Value::Int(15),
            Value::Int(2023),
            Value::Int(12),
            Value::Int(31),
        ]);
        assert_eq!(args[6], Value::from("example"));
        assert_eq!(args[12], Value::Int(3));
    }
}
