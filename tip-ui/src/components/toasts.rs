use egui::{Align2, Context, Id, Order};

use crate::toast::ToastQueue;

/// Distance of the newest toast from the bottom edge.
const BOTTOM_MARGIN: f32 = 24.0;
/// Vertical space taken by one toast.
const TOAST_SPACING: f32 = 44.0;

/// Draws the visible toasts stacked above the bottom edge, newest lowest.
/// Toasts never take input focus.
pub fn show_toasts(
    ctx: &Context,
    toasts: &ToastQueue,
) {
    for (slot, toast) in toasts.visible().rev().enumerate() {
        let offset = -(BOTTOM_MARGIN + slot as f32 * TOAST_SPACING);

        egui::Area::new(Id::new("toast").with(slot))
            .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, offset))
            .order(Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(toast.message.as_str());
                });
            });
    }
}
