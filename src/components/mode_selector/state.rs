use crate::metrics::Mode;
use egui::Color32;

pub struct ModeButton {
    pub label: &'static str,
    pub mode: Mode,
    pub fill: Color32,
}

pub const MODE_BUTTONS: [ModeButton; 3] = [
    ModeButton {
        label: "Show CPU",
        mode: Mode::CpuOnly,
        fill: Color32::from_rgb(0x4B, 0x99, 0xF2),
    },
    ModeButton {
        label: "Show RAM",
        mode: Mode::RamOnly,
        fill: Color32::from_rgb(0x4C, 0xAF, 0x50),
    },
    ModeButton {
        label: "Show Both",
        mode: Mode::Both,
        fill: Color32::from_rgb(0xA1, 0xC2, 0xB9),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_cover_every_mode_once() {
        let flags: Vec<_> = MODE_BUTTONS
            .iter()
            .map(|button| (button.label, button.mode.show_cpu(), button.mode.show_ram()))
            .collect();
        assert_eq!(
            flags,
            vec![
                ("Show CPU", true, false),
                ("Show RAM", false, true),
                ("Show Both", true, true),
            ]
        );
    }
}
