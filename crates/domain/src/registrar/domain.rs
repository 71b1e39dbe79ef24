//! Domain records.

use crate::value::Value;

use super::single_detail_list;

/// Names whose availability should be checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainCheck {
    names: Vec<String>,
}

impl DomainCheck {
    /// Checks the given fully-qualified names.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Checks `label` under each of `tlds` (`"example"`, `["com", "net"]`).
    #[must_use]
    pub fn label_under<I, S>(label: &str, tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(tlds.into_iter().map(|tld| format!("{label}.{}", tld.as_ref())))
    }

    /// Returns the names to check.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Builds the `[{domain_name}, ...]` list.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Array(
            self.names
                .iter()
                .map(|name| Value::structure([("domain_name", name.as_str())]))
                .collect(),
        )
    }
}

/// Up to five delegated DNS servers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nameservers {
    hosts: [String; 5],
}

impl Nameservers {
    /// Maximum number of DNS servers per domain.
    pub const MAX: usize = 5;

    /// Takes the first five hosts; missing slots are sent empty.
    #[must_use]
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut slots: [String; 5] = Default::default();
        for (slot, host) in slots.iter_mut().zip(hosts) {
            *slot = host.into();
        }
        Self { hosts: slots }
    }

    /// Returns the configured hosts, skipping empty slots.
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(String::as_str).filter(|h| !h.is_empty())
    }

    fn members(&self) -> [(&'static str, Value); 5] {
        let [dns1, dns2, dns3, dns4, dns5] = &self.hosts;
        [
            ("dns1", Value::from(dns1)),
            ("dns2", Value::from(dns2)),
            ("dns3", Value::from(dns3)),
            ("dns4", Value::from(dns4)),
            ("dns5", Value::from(dns5)),
        ]
    }

    /// Builds the `domain_modify_dns` detail list for `domain_name`.
    #[must_use]
    pub fn to_value(&self, domain_name: &str) -> Value {
        single_detail_list(domain_name, self.members())
    }
}

/// Details needed to transfer a domain in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Domain being transferred.
    pub domain_name: String,
    /// New domain password.
    pub domain_password: String,
    /// Authorisation code from the losing registrar.
    pub auth_code: String,
    /// DNS servers to delegate to after transfer.
    pub nameservers: Nameservers,
}

impl TransferRequest {
    /// Builds the `domain_transfer` detail list.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let [dns1, dns2, dns3, dns4, dns5] = self.nameservers.members();
        single_detail_list(
            &self.domain_name,
            [
                ("domain_password", Value::from(&self.domain_password)),
                ("domain_auth_code", Value::from(&self.auth_code)),
                dns1,
                dns2,
                dns3,
                dns4,
                dns5,
            ],
        )
    }
}

/// Re-addresses a nameserver host registered under a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameserverChange {
    /// Domain the host is registered under.
    pub domain_name: String,
    /// Host name of the nameserver.
    pub nameserver: String,
    /// Current IP address.
    pub old_ip: String,
    /// Replacement IP address.
    pub new_ip: String,
}

impl NameserverChange {
    /// Builds the `domain_modify_nameserver` detail list.
    #[must_use]
    pub fn to_value(&self) -> Value {
        single_detail_list(
            &self.domain_name,
            [
                ("nameserver", Value::from(&self.nameserver)),
                ("oldIp", Value::from(&self.old_ip)),
                ("newIp", Value::from(&self.new_ip)),
            ],
        )
    }
}
