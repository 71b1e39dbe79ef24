//! Register sub-member use case.

use registrar_domain::registrar::{MemberProfile, procedures};
use registrar_domain::{CallResponse, ProcedureName, Value};

use crate::error::{WorkflowError, WorkflowResult};
use crate::ports::ProcedureInvoker;
use crate::registrar::Registrar;

/// Input for creating a sub-member account.
#[derive(Debug, Clone)]
pub struct RegisterSubMemberInput {
    /// Account name of the new member.
    pub member_name: String,
    /// Initial password.
    pub password: String,
    /// Contact profile of the account holder.
    pub profile: MemberProfile,
}

/// Results of both steps.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterSubMemberOutput {
    /// Result of `member_register`.
    pub member: Value,
    /// Result of `member_register_domain_reseller`.
    pub reseller: Value,
}

/// Use case for creating a sub-member and making it a domain reseller.
///
/// The reseller step is only sent once the member exists.
pub struct RegisterSubMember<I: ProcedureInvoker + ?Sized> {
    registrar: Registrar<I>,
}

impl<I: ProcedureInvoker + ?Sized> RegisterSubMember<I> {
    /// Creates a new `RegisterSubMember` use case.
    #[must_use]
    pub const fn new(registrar: Registrar<I>) -> Self {
        Self { registrar }
    }

    /// Registers the member, then grants reseller rights.
    ///
    /// # Errors
    ///
    /// Returns the first step that faulted together with its fault.
    #[tracing::instrument(skip_all, fields(member = %input.member_name))]
    pub async fn execute(
        &self,
        input: &RegisterSubMemberInput,
    ) -> WorkflowResult<RegisterSubMemberOutput> {
        let member = step(
            procedures::MEMBER_REGISTER,
            self.registrar
                .register_member(&input.member_name, &input.password, &input.profile)
                .await,
        )?;

        let reseller = step(
            procedures::MEMBER_REGISTER_DOMAIN_RESELLER,
            self.registrar
                .register_domain_reseller(&input.member_name)
                .await,
        )?;

        tracing::info!("sub-member registered");
        Ok(RegisterSubMemberOutput { member, reseller })
    }
}

/// Turns a step's response into its result, naming the step on failure.
pub(crate) fn step(procedure: ProcedureName, response: CallResponse) -> WorkflowResult<Value> {
    response.into_result().map_err(|fault| {
        tracing::warn!(step = %procedure, %fault, "workflow aborted");
        WorkflowError::new(procedure, fault)
    })
}
