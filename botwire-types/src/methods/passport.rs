use crate::types::PassportElementError;

remote_call! {
    /// Tell a user that some of their Telegram Passport elements contain errors.
    ///
    /// The user can't re-submit their Passport until the errors are fixed.
    SetPassportDataErrors("setPassportDataErrors") -> bool {
        required {
            user_id: i64,
            errors: Vec<PassportElementError>,
        }
        optional {}
    }
}
