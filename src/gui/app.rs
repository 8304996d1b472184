use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::dial::{self, Point, PointerPhase, State};
use crate::gui::theme::DialColors;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

pub const DEFAULT_WIDTH: i32 = 480;
pub const DEFAULT_HEIGHT: i32 = 480;

pub struct AppInit {
    pub state: State,
    pub config_path: PathBuf,
    pub overrides: Config,
    pub events: async_channel::Receiver<AppEvent>,
}

pub struct AppModel {
    pub state: Rc<RefCell<State>>,
    pub config_path: PathBuf,
    pub overrides: Config,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Resize(i32, i32),
    Pointer(Point, PointerPhase),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Dial"),
            set_default_size: (DEFAULT_WIDTH, DEFAULT_HEIGHT),

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                set_focusable: true,

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(width, height));
                },

                add_controller = gtk::EventControllerMotion {
                    connect_motion[sender] => move |_, x, y| {
                        sender.input(AppMsg::Pointer(Point::new(x, y), PointerPhase::Move));
                    }
                },

                add_controller = gtk::GestureClick {
                    connect_pressed[sender] => move |_, _, x, y| {
                        sender.input(AppMsg::Pointer(Point::new(x, y), PointerPhase::Press));
                    },
                    connect_released[sender] => move |_, _, x, y| {
                        sender.input(AppMsg::Pointer(Point::new(x, y), PointerPhase::Release));
                    },
                    connect_cancel[sender] => move |gesture, _| {
                        let (x, y) = gesture.bounding_box_center().unwrap_or_default();
                        sender.input(AppMsg::Pointer(Point::new(x, y), PointerPhase::Cancel));
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            state,
            config_path,
            overrides,
            events,
        } = init;

        let state = Rc::new(RefCell::new(state));

        let model = AppModel {
            state: state.clone(),
            config_path,
            overrides,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        widgets.drawing_area.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = dial::draw(cr, &state_draw.borrow()) {
                log::error!("Drawing error: {}", e);
            }
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = events.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Resize(width, height) => {
                let (width, height) = (
                    u32::try_from(width).unwrap_or(0),
                    u32::try_from(height).unwrap_or(0),
                );
                if self.state.borrow_mut().resize(width, height) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Pointer(point, phase) => {
                if self.state.borrow_mut().pointer_event(point, phase) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => {
                    let colors = DialColors::from(&new_config.merge(self.overrides));
                    self.state.borrow_mut().colors = colors;
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Quit => relm4::main_application().quit(),
        }
    }
}
