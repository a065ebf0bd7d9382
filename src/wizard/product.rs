use rocket::request::FromParam;
use serde::{Deserialize, Serialize};
use rocket_okapi::okapi::schemars;
use rocket_okapi::okapi::schemars::JsonSchema;

/// The four financing products. Each maps to one dashboard route slug and
/// one `ProductConfig` describing its wizard.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    BpkbFinancing,
    PropertyFinancing,
    ApInvoiceFinancing,
    ArInvoiceFinancing,
}

impl ProductType {
    pub const ALL: [ProductType; 4] = [
        ProductType::BpkbFinancing,
        ProductType::PropertyFinancing,
        ProductType::ApInvoiceFinancing,
        ProductType::ArInvoiceFinancing,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ProductType::BpkbFinancing => "bpkb-financing",
            ProductType::PropertyFinancing => "property-financing",
            ProductType::ApInvoiceFinancing => "ap-invoice-financing",
            ProductType::ArInvoiceFinancing => "ar-invoice-financing",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }

    pub fn config(&self) -> &'static ProductConfig {
        match self {
            ProductType::BpkbFinancing => &BPKB,
            ProductType::PropertyFinancing => &PROPERTY,
            ProductType::ApInvoiceFinancing => &AP_INVOICE,
            ProductType::ArInvoiceFinancing => &AR_INVOICE,
        }
    }
}

/// Unknown slugs fall through to the 404 catcher.
impl<'a> FromParam<'a> for ProductType {
    type Error = &'a str;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        ProductType::from_slug(param).ok_or(param)
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Tel,
    Textarea,
    Select,
    Url,
    Date,
}

/// One form input of a wizard step. `options` is only populated for
/// `Select` fields; `required` mirrors the HTML-level constraint, which is
/// the only validation the prototype carries.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub options: &'static [&'static str],
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldDef {
    FieldDef {
        name,
        label,
        kind,
        required: true,
        options: &[],
    }
}

const fn select(
    name: &'static str,
    label: &'static str,
    options: &'static [&'static str],
) -> FieldDef {
    FieldDef {
        name,
        label,
        kind: FieldKind::Select,
        required: true,
        options,
    }
}

/// Labeled document group for the invoice products ("A. Perusahaan" …
/// "E. Lain-lain").
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    A,
    B,
    C,
    D,
    E,
}

impl Section {
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::A => "A. Perusahaan",
            Section::B => "B. Keuangan",
            Section::C => "C. Legalitas",
            Section::D => "D. Invoice",
            Section::E => "E. Lain-lain",
        }
    }
}

/// Catalog entry for one required document in manual-upload mode.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct DocumentSpec {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
}

const fn doc(id: &'static str, name: &'static str) -> DocumentSpec {
    DocumentSpec {
        id,
        name,
        section: None,
    }
}

const fn sectioned(id: &'static str, name: &'static str, section: Section) -> DocumentSpec {
    DocumentSpec {
        id,
        name,
        section: Some(section),
    }
}

/// One titled block of the read-only review step. Each product echoes its
/// own subset of the collected fields, not all of them.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct SummaryGroup {
    pub title: &'static str,
    pub fields: &'static [&'static str],
}

pub struct ProductConfig {
    pub product: ProductType,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub steps: &'static [&'static str],
    pub fields: &'static [FieldDef],
    pub documents: &'static [DocumentSpec],
    pub summary: &'static [SummaryGroup],
}

impl ProductConfig {
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn document(&self, id: &str) -> Option<&DocumentSpec> {
        self.documents.iter().find(|d| d.id == id)
    }
}

/* ----------------------------- BPKB ----------------------------- */

pub static BPKB: ProductConfig = ProductConfig {
    product: ProductType::BpkbFinancing,
    title: "BPKB Financing Application",
    subtitle: "Follow the steps below to complete your application.",
    steps: &["BPKB Info", "Documents", "Review"],
    fields: &[
        // Data Diri
        field("namaLengkap", "Nama Lengkap", FieldKind::Text),
        field("noKtp", "No. KTP", FieldKind::Text),
        field("noHp", "No. HP", FieldKind::Tel),
        field("usiaKonsumen", "Usia Konsumen", FieldKind::Number),
        field("alamatSurvey", "Alamat Survey", FieldKind::Textarea),
        field("kelurahan", "Kelurahan", FieldKind::Text),
        field("kecamatan", "Kecamatan", FieldKind::Text),
        // Data Kendaraan
        select("jenisKendaraan", "Jenis Kendaraan", &["Motor", "Mobil"]),
        field("merkKendaraan", "Merk Kendaraan", FieldKind::Text),
        field("tipeKendaraan", "Tipe Kendaraan", FieldKind::Text),
        field("tahunKendaraan", "Tahun Kendaraan", FieldKind::Number),
        field("noPlatKendaraan", "No. Plat Kendaraan", FieldKind::Text),
        field("atasNamaKendaraan", "Atas Nama Kendaraan", FieldKind::Text),
        select("statusKendaraan", "Status Kendaraan", &["Pribadi", "Perusahaan"]),
        select("statusBpkb", "Status BPKB", &["Asli", "Copy"]),
        select("statusPajak", "Status Pajak", &["Lunas", "Belum Lunas"]),
        select("asuransiKendaraan", "Asuransi Kendaraan", &["Ada", "Tidak Ada"]),
        // Informasi Pinjaman
        field("jumlahPinjaman", "Jumlah Pinjaman", FieldKind::Number),
        select("tenorPelunasan", "Tenor Pelunasan", &["12", "24", "36", "48", "60"]),
        // Documents
        field("googleDriveUrl", "Google Drive URL", FieldKind::Url),
    ],
    documents: &[
        doc("fotoKtp", "Foto KTP"),
        doc("fotoBpkb", "Foto BPKB"),
        doc("fotoStnk", "Foto STNK"),
        doc("fotoKendaraanDepan", "Foto Kendaraan (Depan)"),
        doc("fotoKendaraanBelakang", "Foto Kendaraan (Belakang)"),
        doc("fotoKendaraanKanan", "Foto Kendaraan (Kanan)"),
        doc("fotoKendaraanKiri", "Foto Kendaraan (Kiri)"),
    ],
    summary: &[
        SummaryGroup {
            title: "Data Diri",
            fields: &["namaLengkap", "noKtp", "noHp", "usiaKonsumen"],
        },
        SummaryGroup {
            title: "Data Kendaraan",
            fields: &["jenisKendaraan", "merkKendaraan", "tipeKendaraan"],
        },
    ],
};

/* ----------------------------- Property ----------------------------- */

pub static PROPERTY: ProductConfig = ProductConfig {
    product: ProductType::PropertyFinancing,
    title: "Property Financing Application",
    subtitle: "Follow the steps below to complete your application.",
    steps: &["Property Info", "Documents", "Review"],
    fields: &[
        // Data Diri
        field("namaKonsumen", "Nama Konsumen", FieldKind::Text),
        field("noHp", "No. HP", FieldKind::Tel),
        field("alamatProperti", "Alamat Properti", FieldKind::Text),
        field("alamatLengkap", "Alamat Lengkap", FieldKind::Textarea),
        field("kecamatan", "Kecamatan", FieldKind::Text),
        field("kota", "Kota", FieldKind::Text),
        // Informasi Properti
        select("jenisSertifikat", "Jenis Sertifikat", &["SHM", "SHGB"]),
        field("danaDibutuhkan", "Dana Dibutuhkan", FieldKind::Number),
        field("kemampuanAngsuran", "Kemampuan Angsuran per Bulan", FieldKind::Number),
        select("siapDisurvey", "Siap Disurvey", &["Ya", "Tidak"]),
        field("tanggalPengajuan", "Tanggal Pengajuan", FieldKind::Date),
        field("tanggalSubmission", "Tanggal Submission", FieldKind::Date),
        // Documents
        field("googleDriveUrl", "Google Drive URL", FieldKind::Url),
    ],
    documents: &[
        doc("fotoKtp", "Foto KTP"),
        doc("sertifikatProperti", "Sertifikat Properti (SHM/SHGB)"),
        doc("imb", "IMB (Izin Mendirikan Bangunan)"),
        doc("pbb", "PBB (Pajak Bumi dan Bangunan) Terbaru"),
        doc("buktiRekening", "Bukti Rekening Listrik/Air"),
    ],
    summary: &[
        SummaryGroup {
            title: "Data Diri",
            fields: &["namaKonsumen", "noHp", "alamatProperti"],
        },
        SummaryGroup {
            title: "Informasi Properti",
            fields: &["jenisSertifikat", "danaDibutuhkan"],
        },
    ],
};

/* ----------------------------- AP / AR Invoice ----------------------------- */

static INVOICE_DOCUMENTS: [DocumentSpec; 11] = [
    sectioned("aktaPendirian", "Akta Pendirian & Perubahan Terakhir", Section::A),
    sectioned("npwpPerusahaan", "NPWP Perusahaan", Section::A),
    sectioned("nibSiup", "NIB / SIUP", Section::A),
    sectioned("ktpDireksi", "KTP Direksi & Komisaris", Section::A),
    sectioned("rekeningKoran", "Rekening Koran 6 Bulan Terakhir", Section::B),
    sectioned("laporanKeuangan", "Laporan Keuangan 2 Tahun Terakhir", Section::B),
    sectioned("companyProfile", "Company Profile", Section::C),
    sectioned("buktiKontrak", "Kontrak / Purchase Order", Section::C),
    sectioned("invoiceTagihan", "Invoice yang Akan Dibiayai", Section::D),
    sectioned("fakturPajak", "Faktur Pajak", Section::D),
    sectioned("dokumenPendukung", "Dokumen Pendukung Lainnya", Section::E),
];

static INVOICE_SUMMARY: [SummaryGroup; 1] = [SummaryGroup {
    title: "Company Info",
    fields: &["namaPtCv"],
}];

static INVOICE_FIELDS: [FieldDef; 2] = [
    field("namaPtCv", "Nama PT/CV", FieldKind::Text),
    field("googleDriveUrl", "Google Drive URL", FieldKind::Url),
];

pub static AP_INVOICE: ProductConfig = ProductConfig {
    product: ProductType::ApInvoiceFinancing,
    title: "AP Invoice Financing Application",
    subtitle: "Finance your payables to keep supplier relationships healthy.",
    steps: &["Company Info", "Documents", "Review"],
    fields: &INVOICE_FIELDS,
    documents: &INVOICE_DOCUMENTS,
    summary: &INVOICE_SUMMARY,
};

pub static AR_INVOICE: ProductConfig = ProductConfig {
    product: ProductType::ArInvoiceFinancing,
    title: "AR Invoice Financing Application",
    subtitle: "Turn outstanding receivables into working capital.",
    steps: &["Company Info", "Documents", "Review"],
    fields: &INVOICE_FIELDS,
    documents: &INVOICE_DOCUMENTS,
    summary: &INVOICE_SUMMARY,
};
