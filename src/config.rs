// Destination address for the contact form handoff.
pub const CONTACT_EMAIL: &str = "1209ukotaro@gmail.com";
