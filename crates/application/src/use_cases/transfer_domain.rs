//! Transfer domain use case.

use registrar_domain::Value;
use registrar_domain::registrar::{ContactSet, TransferRequest, procedures};

use crate::error::WorkflowResult;
use crate::ports::ProcedureInvoker;
use crate::registrar::Registrar;

use super::register_sub_member::step;

/// Input for transferring a domain in together with its contacts.
#[derive(Debug, Clone)]
pub struct TransferDomainInput {
    /// Contacts to register for the domain.
    pub contacts: ContactSet,
    /// Transfer details.
    pub transfer: TransferRequest,
}

/// Results of both steps.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferDomainOutput {
    /// Result of `contact_register`.
    pub contacts: Value,
    /// Result of `domain_transfer`.
    pub transfer: Value,
}

/// Use case for registering a domain's contacts and then transferring it in.
pub struct TransferDomainWithContacts<I: ProcedureInvoker + ?Sized> {
    registrar: Registrar<I>,
}

impl<I: ProcedureInvoker + ?Sized> TransferDomainWithContacts<I> {
    /// Creates a new `TransferDomainWithContacts` use case.
    #[must_use]
    pub const fn new(registrar: Registrar<I>) -> Self {
        Self { registrar }
    }

    /// Registers the contacts, then requests the transfer.
    ///
    /// # Errors
    ///
    /// Returns the faulted step. A contact registration fault means the
    /// transfer is never requested.
    #[tracing::instrument(skip_all, fields(domain = %input.transfer.domain_name))]
    pub async fn execute(&self, input: &TransferDomainInput) -> WorkflowResult<TransferDomainOutput> {
        let contacts = step(
            procedures::CONTACT_REGISTER,
            self.registrar.register_contacts(&input.contacts).await,
        )?;

        let transfer = step(
            procedures::DOMAIN_TRANSFER,
            self.registrar.transfer_domain(&input.transfer).await,
        )?;

        tracing::info!("transfer requested");
        Ok(TransferDomainOutput { contacts, transfer })
    }
}
