// User-facing text. The dashboard is Vietnamese-only.

pub const LOADING: &str = "Đang tải dữ liệu...";
pub const LOAD_FAILED: &str = "Không thể tải dữ liệu. Vui lòng thử lại!";

pub const URL_REQUIRED: &str = "Vui lòng nhập URL video!";
pub const CONNECTION_FAILED: &str = "Lỗi kết nối đến server!";
pub const ADD_SUCCEEDED: &str = "Thêm video thành công!";

pub const CONFIRM_DELETE: &str = "Bạn có chắc chắn muốn xóa video này?";
pub const DELETE_FAILED: &str = "Xóa video thất bại. Vui lòng thử lại!";
pub const CONFIRM_DELETE_ALL: &str = "Bạn có chắc chắn muốn xóa tất cả video?";
pub const DELETE_ALL_FAILED: &str = "Xóa tất cả video thất bại. Vui lòng thử lại!";

pub const COLUMN_SEQUENCE: &str = "STT";
pub const COLUMN_ICON: &str = "Icon";
pub const COLUMN_LINK: &str = "Link";
pub const COLUMN_DELETE: &str = "Delete";
pub const WATCH_VIDEO: &str = "Xem Video";

pub const DIALOG_TITLE: &str = "Thêm Video";
pub const DIALOG_PLACEHOLDER: &str = "Nhập URL video";
pub const CANCEL: &str = "Hủy";
pub const SAVE: &str = "Lưu";
pub const RELOAD: &str = "Làm mới";

pub const NOT_FOUND: &str = "404 - Không tìm thấy trang";
pub const BACK_HOME: &str = "Quay lại trang chủ";

pub fn panel_title(count: usize) -> String {
    format!("TikTok Videos ({count})")
}

pub fn server_error(message: &str) -> String {
    format!("Lỗi: {message}")
}
