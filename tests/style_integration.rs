// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_chapel::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_chapel::ui::styles::{button, container, overlay};
    use iced_chapel::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;
        let status = iced::widget::button::Status::Active;

        let _ = button::primary(&theme, status);
        let _ = button::secondary(&theme, status);
        let _ = button::danger(&theme, status);
        let _ = button::link(&theme, status);
        let _ = button::card(&theme, status);
        let _ = button::nav_link(true)(&theme, status);
    }

    #[test]
    fn container_and_overlay_styles_follow_theme() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = container::page(&theme);
            let _ = container::card(&theme);
            let _ = container::navbar(&theme);
            let _ = container::notice(true)(&theme);
            let _ = overlay::play_badge(&theme);

            let backdrop = overlay::backdrop(&theme);
            assert!(backdrop.background.is_some());
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;

        // The scroll lock pads by this width; it has to be a real gutter.
        assert!(sizing::SCROLLBAR_WIDTH > 0.0);
        assert!(sizing::NAVBAR_HEIGHT < sizing::HERO_HEIGHT);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::for_theme(&ThemeMode::Light.to_theme());
        let dark = ColorScheme::for_theme(&ThemeMode::Dark.to_theme());

        // Surface colors should be visually opposite between light and dark
        assert!(light.surface_primary.r > dark.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text_primary.r < dark.text_primary.r);
    }
}
