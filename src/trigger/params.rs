use url::Url;

use super::reference::resolve_tag;
use crate::error::TriggerError;

pub const TOKEN: &str = "token";
pub const BUILD_REF: &str = "BUILD_REF";
pub const IMAGE_TAG: &str = "IMAGE_TAG";

/// Query parameters forwarded to the job's `buildWithParameters` endpoint.
///
/// Pairs are kept in insertion order: `token`, `BUILD_REF`, `IMAGE_TAG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildParams {
    pairs: Vec<(&'static str, String)>,
}

impl BuildParams {
    /// Build the parameter set, deriving `IMAGE_TAG` from the ref unless one is given
    pub fn new(token: &str, build_ref: &str, image_tag: Option<&str>) -> Result<Self, TriggerError> {
        let image_tag = match image_tag {
            Some(tag) => tag.to_string(),
            None => resolve_tag(build_ref)?,
        };

        Ok(Self {
            pairs: vec![
                (TOKEN, token.to_string()),
                (BUILD_REF, build_ref.to_string()),
                (IMAGE_TAG, image_tag),
            ],
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Append the parameters, form-encoded, to the query of `base`
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut().extend_pairs(self.iter());
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://ci.example.com/job/release/buildWithParameters").unwrap()
    }

    #[test]
    fn derives_image_tag_from_ref() {
        let params = BuildParams::new("secret", "refs/heads/master", None).unwrap();
        assert_eq!(params.get(IMAGE_TAG), Some("latest"));
        assert_eq!(params.get(BUILD_REF), Some("refs/heads/master"));
    }

    #[test]
    fn explicit_image_tag_overrides_derivation() {
        let params = BuildParams::new("secret", "refs/tags/v1.0.0", Some("nightly")).unwrap();
        assert_eq!(params.get(IMAGE_TAG), Some("nightly"));
    }

    #[test]
    fn explicit_image_tag_skips_ref_validation() {
        let params = BuildParams::new("secret", "", Some("v1.0.0")).unwrap();
        assert_eq!(params.get(IMAGE_TAG), Some("v1.0.0"));
    }

    #[test]
    fn empty_explicit_image_tag_is_forwarded_as_is() {
        let params = BuildParams::new("secret", "refs/tags/v1.0.0", Some("")).unwrap();
        assert_eq!(params.get(IMAGE_TAG), Some(""));

        let url = params.to_url(&base());
        assert_eq!(
            url.query(),
            Some("token=secret&BUILD_REF=refs%2Ftags%2Fv1.0.0&IMAGE_TAG=")
        );
    }

    #[test]
    fn invalid_ref_without_tag_fails() {
        let err = BuildParams::new("secret", "", None).unwrap_err();
        assert!(matches!(err, TriggerError::InvalidReference(_)));
    }

    #[test]
    fn query_keeps_insertion_order() {
        let params = BuildParams::new("abc", "refs/tags/v1.0.0", None).unwrap();
        let url = params.to_url(&base());
        assert_eq!(
            url.query(),
            Some("token=abc&BUILD_REF=refs%2Ftags%2Fv1.0.0&IMAGE_TAG=v1.0.0")
        );
    }

    #[test]
    fn query_escapes_reserved_characters() {
        let params = BuildParams::new("a b&c", "refs/heads/master", Some("v1.0.0+build/7")).unwrap();
        let url = params.to_url(&base());
        assert_eq!(
            url.query(),
            Some("token=a+b%26c&BUILD_REF=refs%2Fheads%2Fmaster&IMAGE_TAG=v1.0.0%2Bbuild%2F7")
        );

        let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(keys, vec![TOKEN, BUILD_REF, IMAGE_TAG]);
    }

    #[test]
    fn existing_query_on_base_is_preserved() {
        let base = Url::parse("https://ci.example.com/buildWithParameters?delay=0sec").unwrap();
        let params = BuildParams::new("t", "master", None).unwrap();
        let url = params.to_url(&base);
        assert_eq!(url.query(), Some("delay=0sec&token=t&BUILD_REF=master&IMAGE_TAG=latest"));
    }
}
