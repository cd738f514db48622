// SPDX-License-Identifier: MPL-2.0
//! Demo application for the toast overlay.
//!
//! Press the buttons to push notifications of each severity, one with a
//! custom time-to-live, and a burst of six that demonstrates oldest-first
//! eviction at the five-toast cap.

use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, Element, Length, Task, Theme};
use iced_toasts::{config, manager, Corner, Manager, Notification, Severity, Toast};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Message {
    Show(Severity),
    ShowLongLived,
    ShowBurst,
    Notification(manager::Message),
}

struct Demo {
    manager: Manager,
    corner: Corner,
}

impl Demo {
    fn new(config: &config::Config) -> (Self, Task<Message>) {
        (
            Self {
                manager: Manager::with_settings(config.max_visible(), config.default_duration()),
                corner: config.corner(),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        String::from("iced_toasts demo")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(severity) => {
                let text = match severity {
                    Severity::Success => "File saved",
                    Severity::Error => "Something went wrong",
                    Severity::Warning => "Disk space is running low",
                    Severity::Info => "3 files imported",
                };
                self.manager
                    .push(Notification::new(severity, text))
                    .map(Message::Notification)
            }
            Message::ShowLongLived => self
                .manager
                .push(Notification::info("This one stays for ten seconds").duration(
                    Duration::from_secs(10),
                ))
                .map(Message::Notification),
            Message::ShowBurst => {
                let tasks: Vec<Task<Message>> = (1..=6)
                    .map(|i| {
                        self.manager
                            .push(Notification::info(format!("Burst message {i}")))
                            .map(Message::Notification)
                    })
                    .collect();
                Task::batch(tasks)
            }
            Message::Notification(message) => {
                self.manager.handle_message(message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Column::new()
            .spacing(8)
            .push(button(Text::new("Success")).on_press(Message::Show(Severity::Success)))
            .push(button(Text::new("Error")).on_press(Message::Show(Severity::Error)))
            .push(button(Text::new("Warning")).on_press(Message::Show(Severity::Warning)))
            .push(button(Text::new("Info")).on_press(Message::Show(Severity::Info)))
            .push(button(Text::new("Long-lived")).on_press(Message::ShowLongLived))
            .push(button(Text::new("Burst of six")).on_press(Message::ShowBurst));

        let content = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        let overlay = Toast::view_overlay(&self.manager, self.corner).map(Message::Notification);

        Stack::new().push(content).push(overlay).into()
    }
}

fn main() -> iced::Result {
    use std::cell::RefCell;

    let mut args = pico_args::Arguments::from_env();
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap();
    let config = match config_path {
        Some(path) => config::load_from_path(&path).unwrap_or_default(),
        None => config::load().unwrap_or_default(),
    };

    // Wrap the config in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming it once (iced 0.14 requires Fn,
    // not FnOnce)
    let boot_state = RefCell::new(Some(config));
    let boot = move || {
        let config = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        Demo::new(&config)
    };

    iced::application(boot, Demo::update, Demo::view)
        .title(Demo::title)
        .theme(Demo::theme)
        .run()
}
