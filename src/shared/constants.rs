/// Fallback message when the prediction server gives no usable error
pub const DEFAULT_PREDICTION_ERROR: &str = "Terjadi kesalahan";

/// Conflict message for a submission while another is outstanding
pub const SUBMISSION_IN_PROGRESS: &str = "Prediksi sedang diproses, mohon tunggu";

// =============================================================================
// RESULT VIEW COPY
// =============================================================================

pub const IDLE_PROMPT: &str = "Masukkan detail rumah untuk melihat hasil di sini.";

pub const LOADING_MESSAGE: &str = "Model sedang menghitung...";

pub const ERROR_TITLE: &str = "Kesalahan Prediksi";

pub const SUCCESS_TITLE: &str = "Estimasi Jual";

// =============================================================================
// SUBMIT BUTTON COPY
// =============================================================================

pub const SUBMIT_LABEL: &str = "PREDIKSI HARGA RUMAH SEKARANG";

pub const SUBMIT_LABEL_BUSY: &str = "Memproses...";
