use rocket::request::FromParam;
use serde::Serialize;

use crate::wizard::ProductType;

/// Supported locales. Unknown codes in query strings fall back to English;
/// unknown codes in path segments are a routing-level 404.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default, FromFormField)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[field(value = "en")]
    En,
    #[field(value = "id")]
    Id,
}

impl<'a> FromParam<'a> for Locale {
    type Error = &'a str;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        match param {
            "en" => Ok(Locale::En),
            "id" => Ok(Locale::Id),
            other => Err(other),
        }
    }
}

pub struct AuthMessages {
    pub login_error: &'static str,
    pub password_mismatch: &'static str,
    pub password_too_short: &'static str,
    pub registration_success: &'static str,
    pub logout_success: &'static str,
}

pub struct DashboardMessages {
    pub title: &'static str,
    pub welcome: &'static str,
    pub start_application: &'static str,
    pub submit: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub gdrive_hint: &'static str,
}

static AUTH_EN: AuthMessages = AuthMessages {
    login_error: "Invalid email or password",
    password_mismatch: "Passwords do not match",
    password_too_short: "Password must be at least 8 characters",
    registration_success: "Account created. Please sign in.",
    logout_success: "Signed out",
};

static AUTH_ID: AuthMessages = AuthMessages {
    login_error: "Email atau kata sandi salah",
    password_mismatch: "Kata sandi tidak cocok",
    password_too_short: "Kata sandi minimal 8 karakter",
    registration_success: "Akun berhasil dibuat. Silakan masuk.",
    logout_success: "Berhasil keluar",
};

static DASHBOARD_EN: DashboardMessages = DashboardMessages {
    title: "Dashboard",
    welcome: "Welcome back, {name}",
    start_application: "Start Application",
    submit: "Submit Application",
    previous: "Previous",
    next: "Next",
    gdrive_hint: "Make sure the link has viewing permission (Anyone with the link)",
};

static DASHBOARD_ID: DashboardMessages = DashboardMessages {
    title: "Dasbor",
    welcome: "Selamat datang kembali, {name}",
    start_application: "Mulai Pengajuan",
    submit: "Kirim Pengajuan",
    previous: "Sebelumnya",
    next: "Selanjutnya",
    gdrive_hint: "Pastikan link memiliki izin viewing (Siapa saja yang memiliki link)",
};

pub fn auth(locale: Locale) -> &'static AuthMessages {
    match locale {
        Locale::En => &AUTH_EN,
        Locale::Id => &AUTH_ID,
    }
}

pub fn dashboard(locale: Locale) -> &'static DashboardMessages {
    match locale {
        Locale::En => &DASHBOARD_EN,
        Locale::Id => &DASHBOARD_ID,
    }
}

/// Short product card copy for the dashboard launcher grid.
pub fn product_description(product: ProductType, locale: Locale) -> &'static str {
    match (product, locale) {
        (ProductType::BpkbFinancing, Locale::En) => {
            "Get financing with your vehicle ownership document as collateral"
        }
        (ProductType::BpkbFinancing, Locale::Id) => {
            "Dapatkan pembiayaan dengan jaminan BPKB kendaraan Anda"
        }
        (ProductType::PropertyFinancing, Locale::En) => {
            "Unlock the value of your property with certificate-backed financing"
        }
        (ProductType::PropertyFinancing, Locale::Id) => {
            "Manfaatkan nilai properti Anda dengan jaminan sertifikat"
        }
        (ProductType::ApInvoiceFinancing, Locale::En) => {
            "Finance your account-payable invoices to pay suppliers on time"
        }
        (ProductType::ApInvoiceFinancing, Locale::Id) => {
            "Biayai tagihan hutang usaha agar pembayaran supplier tepat waktu"
        }
        (ProductType::ArInvoiceFinancing, Locale::En) => {
            "Turn your account-receivable invoices into immediate working capital"
        }
        (ProductType::ArInvoiceFinancing, Locale::Id) => {
            "Ubah tagihan piutang usaha menjadi modal kerja segera"
        }
    }
}
