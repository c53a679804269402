use thiserror::Error;

/// A required field that blocks the wizard from advancing or an order from
/// being submitted.
///
/// These are never raised out of the reducer; they are reported so a front end
/// can disable its "next" control and explain why.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("select an order type")]
    MissingOrderType,

    #[error("select an edition")]
    MissingEdition,

    #[error("select a license model")]
    MissingLicenseModel,

    #[error("select a bundle size")]
    MissingBundleType,

    #[error("enter at least one user")]
    InvalidUserCount,

    #[error("enter the customer name")]
    MissingCustomerName,

    #[error("enter an expiration date")]
    MissingExpirationDate,
}
