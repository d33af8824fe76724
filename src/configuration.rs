use reqwest::Url;
use secrecy::Secret;

static BASE_URL: &str = "https://dhr.deno.dev";

#[derive(Clone)]
pub struct Config {
    pub base_url: Url,
    pub credentials: Credentials,
}

#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: Secret<String>,
    pub role: String,
    pub subtype: String,
}

impl Config {
    pub fn init() -> Self {
        let base_url = Url::parse(BASE_URL).expect("Failed to parse the base url");
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            credentials: Credentials::admin(),
        }
    }
}

impl Credentials {
    fn admin() -> Self {
        Self {
            email: "admin@drishti.gov.in".into(),
            password: Secret::new("admin123".into()),
            role: "osda_admin".into(),
            subtype: "super_admin".into(),
        }
    }
}
