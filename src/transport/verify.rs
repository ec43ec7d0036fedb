use super::params::{ParamValue, Params};
use crate::domain::{Receptor, TemplateName, VerifyLookup, VerifyToken};

pub fn encode_verify_lookup_params(request: &VerifyLookup) -> Params {
    let mut params = Params::new();
    params.push(Receptor::FIELD, ParamValue::text(request.receptor.raw()));
    params.push(VerifyToken::FIELD, ParamValue::text(request.token.as_str()));
    params.push(
        TemplateName::FIELD,
        ParamValue::text(request.template.as_str()),
    );
    params
}
