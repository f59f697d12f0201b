//! DTOs for decoding ViaCEP JSON responses.
//!
//! ViaCEP answers unknown postal codes with `200 OK` and an `erro` marker
//! instead of an address. Older deployments send a boolean, newer ones the
//! string `"true"`.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::Address;
use crate::domain::ports::AddressLookupError;

#[derive(Debug, Deserialize)]
pub(super) struct ViaCepResponseDto {
    #[serde(default)]
    pub(super) erro: Option<Value>,
    #[serde(default)]
    pub(super) cep: Option<String>,
    #[serde(default)]
    pub(super) logradouro: Option<String>,
    #[serde(default)]
    pub(super) complemento: Option<String>,
    #[serde(default)]
    pub(super) bairro: Option<String>,
    #[serde(default)]
    pub(super) localidade: Option<String>,
    #[serde(default)]
    pub(super) uf: Option<String>,
    #[serde(default)]
    pub(super) ibge: Option<String>,
}

impl ViaCepResponseDto {
    fn reports_unknown_postal_code(&self) -> bool {
        match &self.erro {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    pub(super) fn into_domain_address(
        self,
        postal_code: &str,
    ) -> Result<Address, AddressLookupError> {
        if self.reports_unknown_postal_code() {
            return Err(AddressLookupError::unknown_postal_code(postal_code));
        }
        let city = non_blank(self.localidade)
            .ok_or_else(|| AddressLookupError::decode("response is missing `localidade`"))?;

        Ok(Address {
            city,
            state: non_blank(self.uf).unwrap_or_default(),
            postal_code: non_blank(self.cep),
            street: non_blank(self.logradouro),
            complement: non_blank(self.complemento),
            district: non_blank(self.bairro),
            ibge_code: non_blank(self.ibge),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
