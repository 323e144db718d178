// SPDX-License-Identifier: MPL-2.0
//! Demo window exercising every alert flavor.

use iced::widget::{button, column, row, text, Container, Stack};
use iced::{Element, Length, Subscription, Task, Theme};
use iced_alerts::{config, ui, Alerts, Button, IcedSurface, Overrides, Position};

#[derive(Debug, Clone)]
enum Message {
    Success,
    Error,
    Question,
    Loading,
    Sticky,
    Clear,
    ToggleTheme,
    Alerts(ui::Message),
}

struct Demo {
    alerts: Alerts<IcedSurface>,
    dark: bool,
}

impl Demo {
    fn new() -> Self {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not read alert config");
            config::Config::default()
        });
        let alerts = Alerts::from_config(IcedSurface::new(), &config);
        let dark = alerts.controller().container().dark;
        Self { alerts, dark }
    }

    fn title(&self) -> String {
        String::from("Iced Alerts")
    }

    fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Success => {
                let _ = self.alerts.success("Changes saved", Overrides::new());
            }
            Message::Error => {
                let _ = self.alerts.error(
                    "Upload failed",
                    Overrides::new()
                        .sound(true)
                        .position(Position::BottomRight)
                        .draggable(true),
                );
            }
            Message::Question => {
                let _ = self.alerts.question(
                    "Keep the new layout?",
                    Overrides::new()
                        .timeout_ms(0)
                        .overlay(true)
                        .overlay_close(true)
                        .button(Button::new("Keep").on_press(|| tracing::info!("layout kept")))
                        .button(Button::new("Later").close_on_click(false)),
                );
            }
            Message::Loading => {
                let _ = self.alerts.loading("Indexing…", Overrides::new().queue(false));
            }
            Message::Sticky => {
                let _ = self.alerts.info(
                    "Hover me to pause",
                    Overrides::new().timeout_ms(10_000).queue(false),
                );
            }
            Message::Clear => {
                self.alerts.clear();
            }
            Message::ToggleTheme => {
                self.dark = !self.dark;
                self.alerts
                    .set_theme_mode(if self.dark { "dark" } else { "light" });
            }
            Message::Alerts(message) => ui::update(&mut self.alerts, message),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = column![
            row![
                button(text("Success")).on_press(Message::Success),
                button(text("Error")).on_press(Message::Error),
                button(text("Question")).on_press(Message::Question),
            ]
            .spacing(8),
            row![
                button(text("Loading")).on_press(Message::Loading),
                button(text("Sticky")).on_press(Message::Sticky),
                button(text("Clear")).on_press(Message::Clear),
                button(text("Theme")).on_press(Message::ToggleTheme),
            ]
            .spacing(8),
        ]
        .spacing(8);

        let content = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill);

        Stack::new()
            .push(content)
            .push(ui::view(&self.alerts).map(Message::Alerts))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        ui::subscription(&self.alerts).map(Message::Alerts)
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Demo::new, Demo::update, Demo::view)
        .title(Demo::title)
        .theme(Demo::theme)
        .subscription(Demo::subscription)
        .run()
}
