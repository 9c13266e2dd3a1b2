use portfolio_wasm::toast::{ToastKind, ToastNotification};

#[test]
fn error_toasts_use_danger_background() {
    let toast = ToastNotification::new(ToastKind::Error, "Please fix the errors in the form");
    assert_eq!(
        toast.class_name(),
        "toast align-items-center text-bg-danger border-0"
    );
}

#[test]
fn success_toasts_use_success_background() {
    let toast = ToastNotification::new(ToastKind::Success, String::from("Sent"));
    assert_eq!(toast.message, "Sent");
    assert!(toast.class_name().contains("text-bg-success"));
}
