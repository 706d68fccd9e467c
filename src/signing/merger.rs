//! Layering call-specific fields onto a signed base
//!
//! The client signs its account-level fields once at construction. Every call
//! decodes that base, drops the stale signature, nonce and timestamp, and
//! re-signs the union with the call's own fields.

use secrecy::SecretString;

use super::codec;
use super::nonce::NonceGenerator;
use super::params::ParameterSet;
use super::signer::{self, SIGNATURE_KEY, SignedQuery};
use crate::{Error, Result};

/// camelCase names of the fields regenerated on every merge
const REGENERATED: [&str; 4] = ["apiFormat", "apiKey", "apiNonce", "apiTimestamp"];

/// A decoded base ready to accept per-call fields
#[derive(Debug)]
pub struct ParamMerger<'a> {
    api_key: String,
    carried: ParameterSet,
    secret: &'a SecretString,
    nonce: &'a NonceGenerator,
}

/// Decode `signed_base` so call-specific fields can be merged into it
pub fn with_params<'a>(
    signed_base: &SignedQuery,
    secret: &'a SecretString,
    nonce: &'a NonceGenerator,
) -> Result<ParamMerger<'a>> {
    let mut base = codec::parse(signed_base.as_str())?;
    base.remove(SIGNATURE_KEY);
    let mut base = base.to_camel_case();

    let api_key = base
        .get("apiKey")
        .and_then(|value| value.as_str())
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_argument("signed base has no api_key"))?;

    for field in REGENERATED {
        base.remove(field);
    }

    Ok(ParamMerger {
        api_key,
        carried: base.to_snake_case(),
        secret,
        nonce,
    })
}

impl ParamMerger<'_> {
    /// Sign the base plus `extra` (keys snake_cased, `extra` wins on collision)
    pub fn merge(&self, extra: &ParameterSet) -> SignedQuery {
        let mut custom = self.carried.clone();
        custom.extend(&extra.to_snake_case());
        signer::generate_params(&self.api_key, self.secret, self.nonce, Some(&custom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::ParamValue;
    use pretty_assertions::assert_eq;

    fn secret() -> SecretString {
        SecretString::from("s3cr3t".to_string())
    }

    fn base(nonce: &NonceGenerator) -> SignedQuery {
        signer::generate_params("KEY", &secret(), nonce, None)
    }

    #[test]
    fn test_merge_drops_stale_signature() {
        let nonce = NonceGenerator::new();
        let secret = secret();
        let base = base(&nonce);
        let old_signature = base.signature().unwrap().to_string();

        let merged = with_params(&base, &secret, &nonce)
            .unwrap()
            .merge(&ParameterSet::new().with("videoKey", "abc123"));

        assert!(!merged.as_str().contains(&old_signature));
        assert_eq!(merged.as_str().matches("api_signature=").count(), 1);
        assert!(signer::verify(merged.as_str(), &secret));
    }

    #[test]
    fn test_merge_snake_cases_extra_and_refreshes_nonce() {
        let nonce = NonceGenerator::new();
        let secret = secret();
        let base = base(&nonce);
        let base_params = base.params().unwrap();

        let merged = with_params(&base, &secret, &nonce)
            .unwrap()
            .merge(&ParameterSet::new().with("videoKey", "abc123").with("title", "Clip"))
            .params()
            .unwrap();

        assert_eq!(
            merged.keys().collect::<Vec<_>>(),
            vec![
                "api_format",
                "api_key",
                "api_nonce",
                "api_timestamp",
                "video_key",
                "title",
                "api_signature"
            ]
        );
        assert_eq!(merged.get("video_key"), Some(&ParamValue::Text("abc123".into())));
        assert_eq!(merged.get("api_key"), Some(&ParamValue::Text("KEY".into())));
        assert_ne!(merged.get("api_nonce"), base_params.get("api_nonce"));
    }

    #[test]
    fn test_merge_carries_extra_base_fields() {
        let nonce = NonceGenerator::new();
        let secret = secret();
        let base = signer::generate_params(
            "KEY",
            &secret,
            &nonce,
            Some(&ParameterSet::new().with("result_limit", "10")),
        );

        let merged = with_params(&base, &secret, &nonce)
            .unwrap()
            .merge(&ParameterSet::new().with("videoKey", "abc"))
            .params()
            .unwrap();

        assert_eq!(merged.get("result_limit"), Some(&ParamValue::Text("10".into())));
        assert_eq!(merged.get("video_key"), Some(&ParamValue::Text("abc".into())));
    }

    #[test]
    fn test_successive_merges_never_repeat() {
        let nonce = NonceGenerator::new();
        let secret = secret();
        let base = base(&nonce);
        let merger = with_params(&base, &secret, &nonce).unwrap();

        let extra = ParameterSet::new().with("videoKey", "same");
        let first = merger.merge(&extra);
        let second = merger.merge(&extra);
        assert_ne!(first.signature(), second.signature());
    }

    #[test]
    fn test_base_without_api_key_is_rejected() {
        let nonce = NonceGenerator::new();
        let secret = secret();
        let bogus = signer::sign(&ParameterSet::new().with("api_format", "json"), &secret);

        let err = with_params(&bogus, &secret, &nonce).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
