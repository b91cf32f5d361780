//! External references used by the About page.

use serde::{
    Deserialize,
    Serialize,
};

use crate::config::CDN_BASE_URL_ENV;
use crate::error::ContentError;

/// Executive Order 14008, section 223 (Justice40).
pub const EXEC_ORDER_LINK: &str = "https://www.federalregister.gov/documents/2021/02/01/2021-02177/tackling-the-climate-crisis-at-home-and-abroad#:~:text=Sec.%20223.%20Justice40,40-percent%20goal.";
/// CEQ questions and answers about the tool.
pub const FAQS_LINK: &str = "https://www.whitehouse.gov/wp-content/uploads/2022/02/CEQ-CEJST-QandA.pdf";
/// Federal Register list of federally recognized tribes.
pub const FED_RECOGNIZED_INDIAN_ENTITIES: &str = "https://www.federalregister.gov/documents/2022/01/28/2022-01789/indian-entities-recognized-by-and-eligible-to-receive-services-from-the-united-states-bureau-of";
/// EPA page on how EJScreen is used.
pub const EJSCREEN: &str = "https://www.epa.gov/ejscreen/how-does-epa-use-ejscreen";
/// White House Environmental Justice Advisory Council.
pub const WHEJAC_RECOMMENDATIONS: &str =
    "https://www.epa.gov/environmentaljustice/white-house-environmental-justice-advisory-council";
/// OMB memo M-23-09 on using the tool.
pub const CEJST_MEMO: &str =
    "https://www.whitehouse.gov/wp-content/uploads/2023/01/M-23-09_Signed_CEQ_CPO.pdf";
/// Census tract boundaries by year.
pub const CENSUS_GEOGRAPHY_BOUNDARIES: &str = "https://www.census.gov/programs-surveys/acs/geography-acs/geography-boundaries-by-year.html";

/// Site-relative page routes.
pub mod pages {
    /// Methodology and data page
    pub const METHODOLOGY: &str = "/methodology";
}

/// Directory of downloadable score files on the CDN, relative to the base URL.
pub const DOWNLOADABLE_DIR: &str = "/data-versions/2.0/data/score/downloadable";

/// A survey form with an English and a Spanish variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyLinks {
    /// English form
    pub en: String,
    /// Spanish form
    pub es: String,
}

impl SurveyLinks {
    /// Pair of form URLs.
    fn new(en: &str, es: &str) -> Self {
        Self { en: en.to_string(), es: es.to_string() }
    }

    /// General feedback on the website.
    #[must_use]
    pub fn site_satisfaction() -> Self {
        Self::new(
            "https://eop.gov1.qualtrics.com/jfe/form/SV_site-satisfaction-en",
            "https://eop.gov1.qualtrics.com/jfe/form/SV_site-satisfaction-es",
        )
    }

    /// Suggestions for new data sources.
    #[must_use]
    pub fn data() -> Self {
        Self::new(
            "https://eop.gov1.qualtrics.com/jfe/form/SV_data-sources-en",
            "https://eop.gov1.qualtrics.com/jfe/form/SV_data-sources-es",
        )
    }

    /// Contact form.
    #[must_use]
    pub fn contact() -> Self {
        Self::new(
            "https://eop.gov1.qualtrics.com/jfe/form/SV_contact-en",
            "https://eop.gov1.qualtrics.com/jfe/form/SV_contact-es",
        )
    }
}

/// A URL made of a deployment-supplied base and a fixed path suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedUrl {
    /// Constant name, used in diagnostics
    name: &'static str,
    /// Base without trailing slashes
    base: Option<String>,
    /// Path appended to the base
    suffix: String,
}

impl DerivedUrl {
    /// Trailing slashes on `base` are dropped so the suffix joins cleanly.
    #[must_use]
    pub fn new(name: &'static str, base: Option<&str>, suffix: impl Into<String>) -> Self {
        Self {
            name,
            base: base.map(|b| b.trim_end_matches('/').to_string()),
            suffix: suffix.into(),
        }
    }

    /// Constant name, e.g. `CEJST_INSTRUCT`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Base URL as configured, minus trailing slashes.
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// True when a base URL was configured, well-formed or not.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.base.is_some()
    }

    /// Full URL.
    ///
    /// A malformed base is joined as given; [`DownloadLinks::check_base_url`]
    /// reports it.
    ///
    /// # Errors
    /// [`ContentError::UnresolvedBaseUrl`] when no base URL was configured.
    pub fn href(&self) -> Result<String, ContentError> {
        self.base.as_ref().map(|base| format!("{base}{}", self.suffix)).ok_or_else(|| {
            ContentError::UnresolvedBaseUrl {
                name: self.name.to_string(),
                env_var: CDN_BASE_URL_ENV,
            }
        })
    }

    /// Full URL, or the bare suffix when the base is missing.
    ///
    /// The bare suffix renders as a broken link rather than failing the page.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        self.href().unwrap_or_else(|_| self.suffix.clone())
    }
}

/// Download links served from the CDN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLinks {
    /// `CEJST_INSTRUCT`
    pub instructions: DerivedUrl,
    /// `CEJST_INSTRUCT_ES`
    pub instructions_es: DerivedUrl,
    /// `CEJST_MEMO_ES`
    pub memo_es: DerivedUrl,
}

impl DownloadLinks {
    /// Derives every download link from one base URL.
    #[must_use]
    pub fn new(cdn_base_url: Option<&str>) -> Self {
        let derive = |name, file: &str| {
            DerivedUrl::new(name, cdn_base_url, format!("{DOWNLOADABLE_DIR}/{file}"))
        };
        Self {
            instructions: derive("CEJST_INSTRUCT", "CEQ-CEJST-Instructions.pdf"),
            instructions_es: derive("CEJST_INSTRUCT_ES", "CEQ-CEJST-Instructions-es.pdf"),
            memo_es: derive("CEJST_MEMO_ES", "M-23-09_Signed_CEQ_CPO_es.pdf"),
        }
    }

    #[must_use]
    pub const fn all(&self) -> [&DerivedUrl; 3] {
        [&self.instructions, &self.instructions_es, &self.memo_es]
    }

    /// The base URL shared by every link.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.instructions.base()
    }

    /// Checks that a configured base URL is an absolute http(s) URL.
    ///
    /// An unset base is not checked here; each link reports it from
    /// [`DerivedUrl::href`].
    ///
    /// # Errors
    /// [`ContentError::MalformedBaseUrl`] when the base is set but malformed.
    pub fn check_base_url(&self) -> Result<(), ContentError> {
        match self.base_url() {
            Some(url) if !is_http_url(url) => Err(ContentError::MalformedBaseUrl {
                url: url.to_string(),
                env_var: CDN_BASE_URL_ENV,
            }),
            _ => Ok(()),
        }
    }
}

/// Starts with `http://` or `https://` and has something after the scheme.
pub(crate) fn is_http_url(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}
