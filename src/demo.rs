//! Demo application for the activity indicator
//!
//! One spinner centered in the window and three controls, mirroring a
//! three-button device: toggle animating (Space/Enter), thicker stroke
//! (ArrowUp), thinner stroke (ArrowDown). On-screen buttons mirror the keys.
//!
//! The thickness rails live here, not in the widget: the indicator stores
//! whatever it is told, and these handlers simply never call the setter
//! outside 1..=10.

use std::time::Instant;

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Fill, Size, Subscription, Task, Theme, keyboard};

use activity_indicator::ActivityIndicator;

const INDICATOR_FRAME: Size = Size::new(50.0, 50.0);

const MIN_THICKNESS: u8 = 1;
const MAX_THICKNESS: u8 = 10;

/// Next thickness up, or `None` at the rail.
fn step_up(thickness: u8) -> Option<u8> {
    (thickness < MAX_THICKNESS).then(|| thickness + 1)
}

/// Next thickness down, or `None` at the rail.
fn step_down(thickness: u8) -> Option<u8> {
    (thickness > MIN_THICKNESS).then(|| thickness - 1)
}

// ============================================================================
// Palette
// ============================================================================

mod palette {
    use iced::{Color, color};

    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const DIVIDER: Color = color!(0x282828);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const ACCENT_PINK: Color = color!(0xff1493);
}

// ============================================================================
// Application
// ============================================================================

/// Demo messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Toggle the spinner between animating and stopped
    ToggleAnimating,
    /// Step stroke thickness up, capped at 10
    ThicknessUp,
    /// Step stroke thickness down, floored at 1
    ThicknessDown,
    /// Frame tick while the spinner is animating
    AnimationTick,
    /// Raw key press, dispatched to one of the actions above
    KeyPressed(keyboard::Key),
}

pub struct Demo {
    indicator: ActivityIndicator,
}

impl Demo {
    /// Create the demo with the spinner already animating, the way a loading
    /// screen would show it.
    pub fn new() -> (Self, Task<Message>) {
        let mut indicator = ActivityIndicator::new(INDICATOR_FRAME);
        indicator.set_color(palette::ACCENT_PINK);
        indicator.set_animating(true);

        tracing::info!("demo ready, spinner animating");
        (Self { indicator }, Task::none())
    }

    pub fn title(&self) -> String {
        String::from("Activity Indicator")
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleAnimating => {
                let animating = !self.indicator.is_animating();
                tracing::info!(animating, "toggling spinner");
                self.indicator.set_animating(animating);
                Task::none()
            }

            Message::ThicknessUp => {
                if let Some(thickness) = step_up(self.indicator.thickness()) {
                    self.indicator.set_thickness(thickness);
                }
                Task::none()
            }

            Message::ThicknessDown => {
                if let Some(thickness) = step_down(self.indicator.thickness()) {
                    self.indicator.set_thickness(thickness);
                }
                Task::none()
            }

            Message::AnimationTick => {
                self.indicator.tick(Instant::now());
                Task::none()
            }

            Message::KeyPressed(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: keyboard::Key) -> Task<Message> {
        use keyboard::Key;
        use keyboard::key::Named;

        match key {
            Key::Named(Named::Space | Named::Enter) => self.update(Message::ToggleAnimating),
            Key::Named(Named::ArrowUp) => self.update(Message::ThicknessUp),
            Key::Named(Named::ArrowDown) => self.update(Message::ThicknessDown),
            _ => Task::none(),
        }
    }

    /// Frame ticks only while the spinner runs; keyboard always.
    pub fn subscription(&self) -> Subscription<Message> {
        let animation_sub = if self.indicator.is_animating() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        };

        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, .. } => Some(Message::KeyPressed(key)),
            _ => None,
        });

        Subscription::batch([animation_sub, keyboard_sub])
    }

    pub fn view(&self) -> Element<'_, Message> {
        let spinner = container(self.indicator.view())
            .center_x(Fill)
            .center_y(Fill);

        let status = text(format!("thickness {}", self.indicator.thickness()))
            .size(13)
            .color(palette::TEXT_SECONDARY);

        let toggle_label = if self.indicator.is_animating() {
            "Stop"
        } else {
            "Start"
        };

        let controls = row![
            control_button("Thinner", Message::ThicknessDown),
            control_button(toggle_label, Message::ToggleAnimating),
            control_button("Thicker", Message::ThicknessUp),
        ]
        .spacing(8);

        container(
            column![spinner, status, controls]
                .spacing(12)
                .align_x(Alignment::Center),
        )
        .padding(16)
        .into()
    }
}

fn control_button(label: &str, on_press: Message) -> Element<'_, Message> {
    button(text(label).size(14).color(palette::TEXT_PRIMARY))
        .padding([8, 16])
        .style(|_theme, status| {
            let background = match status {
                button::Status::Hovered => palette::DIVIDER,
                _ => palette::SURFACE,
            };
            button::Style {
                background: Some(iced::Background::Color(background)),
                text_color: palette::TEXT_PRIMARY,
                border: iced::Border {
                    radius: 8.0.into(),
                    width: 1.0,
                    color: palette::DIVIDER,
                },
                ..Default::default()
            }
        })
        .on_press(on_press)
        .into()
}
