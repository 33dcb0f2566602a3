use std::collections::VecDeque;

use carelog_core::domain::PatientId;
use carelog_core::dto::{PatientDetailDto, PatientListItemDto};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::actions::Action;

const LIST_EMPTY: &str = "No patients. Add one with `carelog add`.";

#[derive(Debug, Clone)]
pub enum Mode {
    List,
    SearchEditing,
    Detail(PatientId),
    ConfirmDelete(PatientId),
}

#[derive(Debug, Clone)]
pub struct App {
    pub mode: Mode,
    pub show_help: bool,
    pub should_quit: bool,
    pub search_input: String,
    pub patients: Vec<PatientListItemDto>,
    pub selected: usize,
    pub detail: Option<PatientDetailDto>,
    pub detail_scroll: usize,
    pub status: Option<String>,
    pub error: Option<String>,
    pub date_pattern: &'static str,
    pub empty_hint: &'static str,
    actions: VecDeque<Action>,
}

impl App {
    pub fn new(date_pattern: &'static str) -> Self {
        let mut app = Self {
            mode: Mode::List,
            show_help: false,
            should_quit: false,
            search_input: String::new(),
            patients: Vec::new(),
            selected: 0,
            detail: None,
            detail_scroll: 0,
            status: None,
            error: None,
            date_pattern,
            empty_hint: LIST_EMPTY,
            actions: VecDeque::new(),
        };
        app.enqueue(Action::LoadList);
        app
    }

    pub fn enqueue(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    pub fn next_action(&mut self) -> Option<Action> {
        self.actions.pop_front()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn selected_patient_id(&self) -> Option<PatientId> {
        self.patients.get(self.selected).map(|patient| patient.id)
    }

    pub fn selected_patient_name(&self) -> Option<&str> {
        self.patients
            .get(self.selected)
            .map(|patient| patient.full_name.as_str())
    }

    pub fn apply_list(&mut self, items: Vec<PatientListItemDto>) {
        self.patients = items;
        if self.selected >= self.patients.len() {
            self.selected = self.patients.len().saturating_sub(1);
        }
    }

    pub fn apply_detail(&mut self, detail: PatientDetailDto) {
        self.detail_scroll = 0;
        self.detail = Some(detail);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        if matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        ) {
            self.should_quit = true;
            return;
        }

        if !matches!(self.mode, Mode::SearchEditing) {
            if matches!(key.code, KeyCode::Char('q')) {
                self.should_quit = true;
                return;
            }

            if matches!(key.code, KeyCode::Char('?')) {
                self.show_help = true;
                return;
            }
        }

        let mut mode = std::mem::replace(&mut self.mode, Mode::List);
        match &mut mode {
            Mode::List => {
                if let Some(next) = self.handle_list_key(key) {
                    mode = next;
                }
            }
            Mode::SearchEditing => {
                if let Some(next) = self.handle_search_key(key) {
                    mode = next;
                }
            }
            Mode::Detail(patient_id) => {
                if let Some(next) = self.handle_detail_key(key, *patient_id) {
                    mode = next;
                }
            }
            Mode::ConfirmDelete(patient_id) => {
                if let Some(next) = self.handle_confirm_key(key, *patient_id) {
                    mode = next;
                }
            }
        }
        self.mode = mode;
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<Mode> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::PageDown => self.move_selection(5),
            KeyCode::PageUp => self.move_selection(-5),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                if !self.patients.is_empty() {
                    self.selected = self.patients.len() - 1;
                }
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected_patient_id() {
                    self.enqueue(Action::LoadDetail(id));
                    return Some(Mode::Detail(id));
                }
            }
            KeyCode::Char('/') => {
                return Some(Mode::SearchEditing);
            }
            KeyCode::Char('c') => {
                self.search_input.clear();
                self.enqueue(Action::LoadList);
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_patient_id() {
                    return Some(Mode::ConfirmDelete(id));
                }
            }
            KeyCode::Char('r') => self.enqueue(Action::LoadList),
            _ => {}
        }
        None
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Mode> {
        match key.code {
            KeyCode::Esc => {
                return Some(Mode::List);
            }
            KeyCode::Enter => {
                self.enqueue(Action::LoadList);
                return Some(Mode::List);
            }
            _ => {
                apply_text_input(&mut self.search_input, key);
            }
        }
        None
    }

    fn handle_detail_key(&mut self, key: KeyEvent, patient_id: PatientId) -> Option<Mode> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => {
                self.detail = None;
                return Some(Mode::List);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
            KeyCode::Char('d') => {
                return Some(Mode::ConfirmDelete(patient_id));
            }
            _ => {}
        }
        None
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, patient_id: PatientId) -> Option<Mode> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.enqueue(Action::Delete(patient_id));
                return Some(Mode::List);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                return Some(Mode::List);
            }
            _ => {}
        }
        None
    }

    fn move_selection(&mut self, delta: isize) {
        if self.patients.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.patients.len() as isize - 1;
        let next = (self.selected as isize + delta).clamp(0, last);
        self.selected = next as usize;
    }
}

fn apply_text_input(target: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            target.clear();
        }
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                target.push(ch);
            }
        }
        KeyCode::Backspace => {
            target.pop();
        }
        _ => {}
    }
}
