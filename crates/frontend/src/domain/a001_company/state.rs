//! Form draft for the company view.

use contracts::domain::a001_company::{Company, CompanyInput};

/// In-progress form state; every attribute is an editable string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompanyDraft {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl CompanyDraft {
    /// Copy an existing record into the draft for editing.
    pub fn from_record(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            address: company.address.clone(),
            phone: company.phone.clone(),
            email: company.email.clone(),
        }
    }

    /// Submit-time conversion into the create/update payload. Required
    /// fields are enforced declaratively on the form controls, so every
    /// company draft converts cleanly.
    pub fn to_input(&self) -> CompanyInput {
        CompanyInput {
            name: self.name.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_round_trip() {
        let company = Company {
            id: 4,
            name: "Acme".into(),
            address: "1 Main St".into(),
            phone: "555-0100".into(),
            email: "info@acme.test".into(),
        };
        let draft = CompanyDraft::from_record(&company);
        assert_eq!(draft.name, "Acme");

        let input = draft.to_input();
        assert_eq!(input.address, "1 Main St");
        assert_eq!(input.email, "info@acme.test");
    }
}
