//! Names of the registrar's remote procedures.

use crate::call::ProcedureName;

/// Checks availability of one or more domain names.
pub const DOMAIN_CHECK: ProcedureName = ProcedureName::from_static("domain_check");
/// Starts a transfer of a domain into the reseller account.
pub const DOMAIN_TRANSFER: ProcedureName = ProcedureName::from_static("domain_transfer");
/// Shows registration details of a domain.
pub const DOMAIN_SHOW_DETAILS: ProcedureName = ProcedureName::from_static("domain_show_details");
/// Shows the contacts attached to a domain.
pub const DOMAIN_SHOW_CONTACT: ProcedureName = ProcedureName::from_static("domain_show_contact");
/// Replaces the delegated DNS servers of a domain.
pub const DOMAIN_MODIFY_DNS: ProcedureName = ProcedureName::from_static("domain_modify_dns");
/// Changes the address of a registered nameserver host.
pub const DOMAIN_MODIFY_NAMESERVER: ProcedureName =
    ProcedureName::from_static("domain_modify_nameserver");
/// Shows a registered nameserver host.
pub const DOMAIN_NAMESERVER_DETAILS: ProcedureName =
    ProcedureName::from_static("domain_nameserver_details");
/// Changes the domain transfer password.
pub const DOMAIN_MODIFY_PASSWORD: ProcedureName =
    ProcedureName::from_static("domain_modify_password");
/// Turns automatic renewal on or off.
pub const DOMAIN_SET_AUTO_RENEWAL: ProcedureName =
    ProcedureName::from_static("domain_set_auto_renewal");
/// Registers the contact set of a domain.
pub const CONTACT_REGISTER: ProcedureName = ProcedureName::from_static("contact_register");
/// Modifies the contact set of a domain.
pub const CONTACT_MODIFY: ProcedureName = ProcedureName::from_static("contact_modify");
/// Shows the profile of a member account.
pub const MEMBER_SHOW_DETAILS: ProcedureName = ProcedureName::from_static("member_show_details");
/// Updates the profile of a member account.
pub const MEMBER_UPDATE_INFO: ProcedureName = ProcedureName::from_static("member_update_info");
/// Changes a member's password.
pub const MEMBER_UPDATE_PASSWORD: ProcedureName =
    ProcedureName::from_static("member_update_password");
/// Creates a sub-member account.
pub const MEMBER_REGISTER: ProcedureName = ProcedureName::from_static("member_register");
/// Grants domain reseller rights to a member.
pub const MEMBER_REGISTER_DOMAIN_RESELLER: ProcedureName =
    ProcedureName::from_static("member_register_domain_reseller");
/// Lists the domains of a member.
pub const MEMBER_DOMAIN_LIST: ProcedureName = ProcedureName::from_static("member_domain_list");
/// Searches the member's domains by name.
pub const MEMBER_DOMAIN_SEARCH: ProcedureName = ProcedureName::from_static("member_domain_search");
/// Quotes the member's price for a product.
pub const MEMBER_PRODUCT_PRICE: ProcedureName = ProcedureName::from_static("member_product_price");
