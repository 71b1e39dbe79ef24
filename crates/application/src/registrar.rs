//! Typed registrar facade
//!
//! Wraps a [`ProcedureInvoker`] with one method per registrar procedure.
//! Each method builds the positional arguments the service expects and
//! prepends the caller's login token.

use std::sync::Arc;

use registrar_domain::registrar::procedures;
use registrar_domain::registrar::{
    ContactSet, DomainCheck, DomainListQuery, MemberProfile, NameserverChange, Nameservers,
    ProductType, TransferRequest,
};
use registrar_domain::{CallRequest, CallResponse, LoginToken, ProcedureName, Value};

use crate::ports::ProcedureInvoker;

/// Registrar API bound to one login.
pub struct Registrar<I: ProcedureInvoker + ?Sized> {
    invoker: Arc<I>,
    login: LoginToken,
}

impl<I: ProcedureInvoker + ?Sized> Clone for Registrar<I> {
    fn clone(&self) -> Self {
        Self {
            invoker: Arc::clone(&self.invoker),
            login: self.login.clone(),
        }
    }
}

impl<I: ProcedureInvoker + ?Sized> Registrar<I> {
    /// Creates a facade that authenticates every call with `login`.
    pub const fn new(invoker: Arc<I>, login: LoginToken) -> Self {
        Self { invoker, login }
    }

    /// Returns the underlying invoker.
    pub const fn invoker(&self) -> &Arc<I> {
        &self.invoker
    }

    /// Returns the login token sent with every call.
    pub const fn login(&self) -> &LoginToken {
        &self.login
    }

    /// Builds a call to `procedure` with the login token as first argument.
    pub fn request(
        &self,
        procedure: ProcedureName,
        arguments: impl IntoIterator<Item = Value>,
    ) -> CallRequest {
        let mut args = vec![self.login.as_value().clone()];
        args.extend(arguments);
        CallRequest::new(procedure, args)
    }

    async fn send(
        &self,
        procedure: ProcedureName,
        arguments: impl IntoIterator<Item = Value>,
    ) -> CallResponse {
        let request = self.request(procedure, arguments);
        self.invoker.call(&request).await
    }

    /// Checks availability of the given names (`domain_check`).
    pub async fn check_domains(&self, check: &DomainCheck) -> CallResponse {
        self.send(procedures::DOMAIN_CHECK, [check.to_value()]).await
    }

    /// Starts a transfer in (`domain_transfer`).
    pub async fn transfer_domain(&self, transfer: &TransferRequest) -> CallResponse {
        self.send(procedures::DOMAIN_TRANSFER, [transfer.to_value()]).await
    }

    /// Registers the four contacts of a domain (`contact_register`).
    pub async fn register_contacts(&self, contacts: &ContactSet) -> CallResponse {
        self.send(procedures::CONTACT_REGISTER, [contacts.to_value()]).await
    }

    /// Replaces the four contacts of a domain (`contact_modify`).
    pub async fn modify_contacts(&self, contacts: &ContactSet) -> CallResponse {
        self.send(procedures::CONTACT_MODIFY, [contacts.to_value()]).await
    }

    /// Fetches the contacts of a domain (`domain_show_contact`).
    pub async fn show_domain_contact(&self, domain_name: &str) -> CallResponse {
        self.send(procedures::DOMAIN_SHOW_CONTACT, [Value::from(domain_name)])
            .await
    }

    /// Fetches the registration details of a domain (`domain_show_details`).
    pub async fn show_domain_details(&self, domain_name: &str) -> CallResponse {
        self.send(procedures::DOMAIN_SHOW_DETAILS, [Value::from(domain_name)])
            .await
    }

    /// Replaces the delegated DNS servers (`domain_modify_dns`).
    pub async fn modify_dns(&self, domain_name: &str, nameservers: &Nameservers) -> CallResponse {
        self.send(procedures::DOMAIN_MODIFY_DNS, [nameservers.to_value(domain_name)])
            .await
    }

    /// Re-addresses a nameserver host (`domain_modify_nameserver`).
    pub async fn modify_nameserver(&self, change: &NameserverChange) -> CallResponse {
        self.send(procedures::DOMAIN_MODIFY_NAMESERVER, [change.to_value()])
            .await
    }

    /// Fetches a nameserver host registered under a domain
    /// (`domain_nameserver_details`).
    pub async fn nameserver_details(&self, domain_name: &str, nameserver: &str) -> CallResponse {
        self.send(
            procedures::DOMAIN_NAMESERVER_DETAILS,
            [Value::from(domain_name), Value::from(nameserver)],
        )
        .await
    }

    /// Changes the domain password (`domain_modify_password`).
    pub async fn modify_domain_password(&self, domain_name: &str, password: &str) -> CallResponse {
        let details = Value::Array(vec![Value::structure([
            ("domain_name", domain_name),
            ("domain_new_password", password),
        ])]);
        self.send(procedures::DOMAIN_MODIFY_PASSWORD, [details]).await
    }

    /// Turns auto-renewal on or off (`domain_set_auto_renewal`).
    pub async fn set_auto_renewal(&self, domain_name: &str, enabled: bool) -> CallResponse {
        let details = Value::Array(vec![Value::structure([
            ("domain_name", Value::from(domain_name)),
            ("domain_auto_renewal", Value::from(enabled)),
        ])]);
        self.send(procedures::DOMAIN_SET_AUTO_RENEWAL, [details]).await
    }

    /// Fetches a member account (`member_show_details`).
    pub async fn member_details(&self, member_name: &str) -> CallResponse {
        self.send(procedures::MEMBER_SHOW_DETAILS, [Value::from(member_name)])
            .await
    }

    /// Updates a member's profile (`member_update_info`).
    pub async fn update_member_info(
        &self,
        member_name: &str,
        profile: &MemberProfile,
    ) -> CallResponse {
        let args = std::iter::once(Value::from(member_name)).chain(profile.to_arguments());
        self.send(procedures::MEMBER_UPDATE_INFO, args).await
    }

    /// Changes a member's password (`member_update_password`).
    pub async fn update_member_password(&self, member_name: &str, password: &str) -> CallResponse {
        self.send(
            procedures::MEMBER_UPDATE_PASSWORD,
            [Value::from(member_name), Value::from(password)],
        )
        .await
    }

    /// Creates a sub-member account (`member_register`).
    pub async fn register_member(
        &self,
        member_name: &str,
        password: &str,
        profile: &MemberProfile,
    ) -> CallResponse {
        let args = [Value::from(member_name), Value::from(password)]
            .into_iter()
            .chain(profile.to_arguments());
        self.send(procedures::MEMBER_REGISTER, args).await
    }

    /// Grants domain reseller rights to a member
    /// (`member_register_domain_reseller`).
    pub async fn register_domain_reseller(&self, member_name: &str) -> CallResponse {
        self.send(
            procedures::MEMBER_REGISTER_DOMAIN_RESELLER,
            [Value::from(member_name)],
        )
        .await
    }

    /// Lists a member's domains (`member_domain_list`).
    pub async fn list_member_domains(
        &self,
        member_name: &str,
        query: &DomainListQuery,
    ) -> CallResponse {
        let args = std::iter::once(Value::from(member_name)).chain(query.to_arguments());
        self.send(procedures::MEMBER_DOMAIN_LIST, args).await
    }

    /// Searches the caller's domains by name (`member_domain_search`).
    pub async fn search_member_domains(&self, domain_name: &str) -> CallResponse {
        self.send(procedures::MEMBER_DOMAIN_SEARCH, [Value::from(domain_name)])
            .await
    }

    /// Quotes a product for a member (`member_product_price`).
    pub async fn product_price(
        &self,
        member_name: &str,
        product: ProductType,
        years: u32,
    ) -> CallResponse {
        self.send(
            procedures::MEMBER_PRODUCT_PRICE,
            [
                Value::from(member_name),
                Value::from(product.code()),
                Value::from(years),
            ],
        )
        .await
    }
}

/// Access to the `details` member most registrar results carry.
pub trait ResponseDetails {
    /// Returns `result.details`, if the call succeeded and has one.
    fn details(&self) -> Option<&Value>;
}

impl ResponseDetails for CallResponse {
    fn details(&self) -> Option<&Value> {
        self.result().and_then(|result| result.get("details"))
    }
}
