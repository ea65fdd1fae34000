//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that owns the current screen and the modal overlays. It routes keys,
//! issues the screen's requests on the background runner and hands replies
//! back. It does not contain business logic itself.

use crate::action::Action;
use crate::component::{Component, Screen};
use crate::components::{
    calculate_main_layout, draw_help_bar, draw_sidebar, draw_status_bar, AccountsScreen,
    BlogDetailScreen, BlogsScreen, ChapterDialog, ChapterExamsScreen, ConfirmDialog,
    CourseDetailScreen, CoursesScreen, ExamEditorScreen, HelpDialog, LoginScreen,
    NewCourseScreen, ShellContext, StatisticsScreen,
};
use crate::model::modal::{Modal, ModalStack};
use crate::model::mutation::MutationKind;
use crate::model::notice::Notice;
use crate::model::route::{Route, Section};
use crate::model::session::Session;
use crate::services::dispatch::{Mutation, Reply, Request};
use crate::services::{Completion, RequestRunner, Services};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, error, info};

/// Shown when a successful write comes back without a message
const DEFAULT_SUCCESS: &str = "Done.";

/// Build the screen for a route
fn screen_for(route: &Route, page_size: u32) -> Box<dyn Screen> {
    match route {
        Route::Login => Box::new(LoginScreen::new()),
        Route::Statistics => Box::new(StatisticsScreen::new()),
        Route::Accounts => Box::new(AccountsScreen::new(page_size)),
        Route::Blogs => Box::new(BlogsScreen::new(page_size)),
        Route::BlogDetail { blog_id } => Box::new(BlogDetailScreen::new(blog_id.clone())),
        Route::Courses => Box::new(CoursesScreen::new(page_size)),
        Route::NewCourse => Box::new(NewCourseScreen::new()),
        Route::CourseDetail { course_id } => {
            Box::new(CourseDetailScreen::new(course_id.clone(), page_size))
        }
        Route::ChapterExams { chapter_id } => {
            Box::new(ChapterExamsScreen::new(chapter_id.clone()))
        }
        Route::ExamEditor { exam_id } => Box::new(ExamEditorScreen::edit(exam_id.clone())),
        Route::NewExam { chapter_id } => Box::new(ExamEditorScreen::create(chapter_id.clone())),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates the screen, dialogs and requests
pub struct App {
    /// Route of the screen on display
    pub route: Route,

    /// Screen bound to `route`
    screen: Box<dyn Screen>,

    /// Routes to return to with Back
    history: Vec<Route>,

    /// Admin route asked for before login; opened once logged in
    pending_route: Option<Route>,

    /// Bumped on every navigation; older completions are stale
    generation: u64,

    /// Background request runner
    runner: RequestRunner,

    /// Authenticated user and cookies
    pub session: Session,

    /// Rows per page for list screens
    page_size: u32,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Transient success/error message
    pub notice: Option<Notice>,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────────────────────
    pub confirm_dialog: ConfirmDialog,
    pub chapter_dialog: ChapterDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create the app and open `initial` (the statistics dashboard by
    /// default), going through the login screen when there is no session
    pub fn new(services: Services, session: Session, page_size: u32, initial: Option<Route>) -> App {
        let mut app = App {
            route: Route::Login,
            screen: screen_for(&Route::Login, page_size),
            history: Vec::new(),
            pending_route: None,
            generation: 0,
            runner: RequestRunner::new(services),
            session,
            page_size,
            modals: ModalStack::new(),
            notice: None,
            should_quit: false,
            confirm_dialog: ConfirmDialog,
            chapter_dialog: ChapterDialog::default(),
            help_dialog: HelpDialog::default(),
        };
        app.navigate(initial.unwrap_or(Route::Statistics), false);
        app
    }

    /// Replace the current screen, applying the session gate
    fn navigate(&mut self, route: Route, remember: bool) {
        let target = route.clone().gate(&self.session);
        if target == Route::Login && route.requires_admin() {
            self.pending_route = Some(route);
        }

        if remember && target != self.route && self.route != Route::Login {
            if self.history.last() == Some(&target) {
                self.history.pop();
            } else {
                self.history.push(self.route.clone());
            }
        }

        info!(from = %self.route.path(), to = %target.path(), "navigate");
        self.screen = screen_for(&target, self.page_size);
        self.route = target;
        self.modals.clear();
        self.generation += 1;
        self.reload();
    }

    /// Previous screen, or the section list when there is no history
    fn back(&mut self) {
        let previous = self.history.pop().or_else(|| {
            self.route
                .section()
                .map(|section| section.route())
                .filter(|route| *route != self.route)
        });
        if let Some(route) = previous {
            self.navigate(route, false);
        }
    }

    /// Issue the current screen's fetches
    fn reload(&mut self) {
        for request in self.screen.load() {
            self.send(request);
        }
    }

    fn send(&mut self, request: Request) {
        debug!(label = request.label(), generation = self.generation, "request");
        self.runner.spawn(self.generation, request);
    }

    fn submit(&mut self, mutation: Mutation) {
        if self.modals.top() == Some(&Modal::ChapterForm) {
            self.modals.pop();
        }
        info!(kind = ?mutation.kind(), "submitting");
        self.send(Request::Mutate(mutation));
    }

    /// Process an action and every follow-up it produces
    fn process(&mut self, action: Action) -> Result<()> {
        let mut current = Some(action);
        while let Some(a) = current {
            current = self.update(a)?;
        }
        Ok(())
    }

    fn on_tick(&mut self) -> Result<()> {
        if self.notice.as_mut().is_some_and(|notice| !notice.tick()) {
            self.notice = None;
        }
        for completion in self.runner.poll() {
            self.complete(completion)?;
        }
        Ok(())
    }

    fn complete(&mut self, completion: Completion) -> Result<()> {
        if let Some(action) = self.apply_completion(completion) {
            self.process(action)?;
        }
        Ok(())
    }

    /// Route a finished request to the screen or the mutation handler
    ///
    /// Mutations always surface their notice; everything else from an older
    /// generation is dropped.
    fn apply_completion(&mut self, completion: Completion) -> Option<Action> {
        let current = completion.generation == self.generation;
        match completion.reply {
            Reply::Mutation { kind, result } => match result {
                Ok(message) => {
                    info!(?kind, "mutation succeeded");
                    let text = if message.is_empty() {
                        DEFAULT_SUCCESS.to_string()
                    } else {
                        message
                    };
                    self.notice = Some(Notice::success(text));
                    if current {
                        self.after_mutation(kind)
                    } else {
                        None
                    }
                }
                Err(e) => {
                    error!(?kind, error = %e, "mutation failed");
                    self.notice = Some(Notice::error(kind.failure_message()));
                    None
                }
            },
            _ if !current => {
                debug!(
                    label = completion.label,
                    generation = completion.generation,
                    "dropping stale completion"
                );
                None
            }
            reply => self.screen.apply(reply),
        }
    }

    /// Where the console goes after a successful write
    fn after_mutation(&mut self, kind: MutationKind) -> Option<Action> {
        match (kind, &self.route) {
            (MutationKind::CreateCourse, _) => Some(Action::Navigate(Route::Courses)),
            (MutationKind::CreateExam, Route::NewExam { chapter_id }) => {
                Some(Action::Navigate(Route::ChapterExams {
                    chapter_id: chapter_id.clone(),
                }))
            }
            (MutationKind::DeleteBlog, Route::BlogDetail { .. }) => {
                Some(Action::Navigate(Route::Blogs))
            }
            _ => {
                self.reload();
                None
            }
        }
    }

    /// Shortcuts available on every screen outside text input
    fn handle_global_key(&self, key: KeyEvent) -> Option<Action> {
        if self.route == Route::Login {
            return None;
        }
        match key.code {
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                Section::all()
                    .get(index)
                    .map(|section| Action::Navigate(section.route()))
            }
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('L') => Some(Action::Logout),
            KeyCode::Char('R') => Some(Action::Refresh),
            KeyCode::Esc => Some(Action::Back),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }
        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }
        if self.screen.is_editing() {
            return self.screen.handle_key_event(key);
        }
        match self.handle_global_key(key) {
            Some(action) => Ok(Some(action)),
            None => self.screen.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            debug!(action = %action, "update");
        }
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => self.on_tick()?,
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Routing & Session
            // ─────────────────────────────────────────────────────────────────
            Action::Navigate(route) => self.navigate(route, true),
            Action::Back => self.back(),
            Action::LoggedIn(login) => {
                if let Err(e) = self.session.init(login) {
                    error!(error = %e, "failed to store session cookies");
                    self.notice = Some(Notice::error("Login failed."));
                    return Ok(None);
                }
                self.history.clear();
                let target = self.pending_route.take().unwrap_or(Route::Statistics);
                self.navigate(target, false);
            }
            Action::Logout => {
                info!("logout");
                self.session.clear();
                self.history.clear();
                self.pending_route = None;
                self.navigate(Route::Login, false);
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::AskConfirm(pending) => {
                self.modals.push(Modal::Confirm { pending });
            }
            Action::OpenChapterForm { course_id, chapter } => {
                self.chapter_dialog = ChapterDialog::open(course_id, chapter.as_ref());
                self.modals.push(Modal::ChapterForm);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => match self.modals.pop() {
                Some(Modal::QuitConfirm) => self.should_quit = true,
                Some(Modal::Confirm { pending }) => {
                    return Ok(Some(Action::Submit(Mutation::Confirmed(pending))));
                }
                _ => {}
            },

            // ─────────────────────────────────────────────────────────────────
            // Data
            // ─────────────────────────────────────────────────────────────────
            Action::Refresh => self.reload(),
            Action::Send(request) => self.send(request),
            Action::Submit(mutation) => self.submit(mutation),
            Action::Notify(notice) => {
                self.notice = Some(notice);
            }

            // ─────────────────────────────────────────────────────────────────
            // Lists, tabs and search belong to the screen
            // ─────────────────────────────────────────────────────────────────
            other => return self.screen.update(other),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area, self.route != Route::Login);
        let path = self.route.path();
        let ctx = ShellContext {
            active: self.route.section(),
            user: self.session.user(),
            path: &path,
            notice: self.notice.as_ref(),
            busy: self.runner.is_busy(),
        };

        if let Some(sidebar) = layout.sidebar {
            draw_sidebar(frame, sidebar, &ctx);
        }
        self.screen.draw(frame, layout.content)?;
        draw_status_bar(frame, layout.status, &ctx);

        let modal = self.modals.top().cloned();
        let hints = match modal {
            Some(ref modal) => Self::modal_hints(modal),
            None => self.screen.hints(),
        };
        draw_help_bar(frame, layout.help, &hints);

        // Draw modal overlay if active
        if let Some(ref modal) = modal {
            self.draw_modal(frame, area, modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm | Modal::Confirm { .. } => self.confirm_dialog.handle_key_event(key),
            Modal::ChapterForm => self.chapter_dialog.handle_key_event(key),
            Modal::Help { .. } => {
                let action = self.help_dialog.handle_key_event(key)?;
                if let Some(Modal::Help { scroll_offset }) = self.modals.top_mut() {
                    *scroll_offset = self.help_dialog.scroll_offset;
                }
                Ok(action)
            }
        }
    }

    fn modal_hints(modal: &Modal) -> Vec<(&'static str, &'static str)> {
        match modal {
            Modal::QuitConfirm | Modal::Confirm { .. } => vec![("y", "Yes"), ("n/Esc", "No")],
            Modal::ChapterForm => vec![
                ("Tab", "Next field"),
                ("Ctrl+s", "Save"),
                ("Esc", "Cancel"),
            ],
            Modal::Help { .. } => vec![("j/k", "Scroll"), ("Esc", "Close")],
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.confirm_dialog.draw_quit(frame, area),
            Modal::Confirm { pending } => {
                self.confirm_dialog.draw_with_pending(frame, area, pending);
            }
            Modal::ChapterForm => self.chapter_dialog.draw(frame, area)?,
            Modal::Help { .. } => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::CourseInput;
    use crate::model::mutation::PendingMutation;
    use crate::model::notice::NoticeLevel;
    use crate::model::user::{LoginResponse, Role, User};
    use crate::services::http::fake::{client, RecordingTransport};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn app(initial: Route) -> (App, Arc<RecordingTransport>) {
        let (api, transport, cookies) = client();
        let app = App::new(Services::new(api), Session::new(cookies), 10, Some(initial));
        (app, transport)
    }

    fn admin() -> LoginResponse {
        LoginResponse {
            user: User {
                id: "u1".to_string(),
                email: "admin@site.dev".to_string(),
                role: Role::Admin,
                ..User::default()
            },
            access_token: "token".to_string(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Wait for the next completion without applying it
    fn next_completion(app: &mut App) -> Completion {
        app.runner
            .wait(Duration::from_secs(5))
            .expect("request did not finish")
    }

    fn create_course() -> Action {
        Action::Submit(Mutation::CreateCourse(CourseInput {
            name: "N5".to_string(),
            description: "Beginner".to_string(),
        }))
    }

    #[test]
    fn test_gate_sends_to_login_and_resumes_route() {
        let (mut app, _) = app(Route::NewCourse);
        assert_eq!(app.route, Route::Login);

        app.process(Action::LoggedIn(admin())).unwrap();
        assert_eq!(app.route, Route::NewCourse);
        assert!(app.session.is_admin());
    }

    #[test]
    fn test_login_reply_opens_dashboard_by_default() {
        let (mut app, transport) = app(Route::Login);
        transport.respond(
            200,
            json!({"data": {"user": {"_id": "u1", "role": "ADMIN"}, "accessToken": "t"}, "message": ""}),
        );

        app.process(Action::Send(Request::Login(crate::model::user::Credentials {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
        })))
        .unwrap();
        let completion = next_completion(&mut app);
        app.complete(completion).unwrap();

        assert_eq!(app.route, Route::Statistics);
        assert_eq!(app.session.user().map(|u| u.id.as_str()), Some("u1"));
    }

    #[test]
    fn test_logout_returns_to_login() {
        let (mut app, _) = app(Route::NewCourse);
        app.process(Action::LoggedIn(admin())).unwrap();

        app.process(Action::Logout).unwrap();
        assert_eq!(app.route, Route::Login);
        assert!(!app.session.is_admin());

        // Admin routes stay closed
        app.process(Action::Navigate(Route::Courses)).unwrap();
        assert_eq!(app.route, Route::Login);
    }

    #[test]
    fn test_global_keys_switch_sections() {
        let (mut app, _) = app(Route::NewCourse);
        app.process(Action::LoggedIn(admin())).unwrap();
        app.process(Action::Navigate(Route::NewExam {
            chapter_id: "ch1".to_string(),
        }))
        .unwrap();

        let action = app.handle_key_event(key(KeyCode::Char('3'))).unwrap();
        assert_eq!(action, Some(Action::Navigate(Route::Blogs)));

        let action = app.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert_eq!(action, Some(Action::Back));
        app.process(Action::Back).unwrap();
        assert_eq!(app.route, Route::NewCourse);
    }

    #[test]
    fn test_successful_create_course_navigates_to_list() {
        let (mut app, transport) = app(Route::NewCourse);
        app.process(Action::LoggedIn(admin())).unwrap();
        transport.respond(200, json!({"data": {}, "message": "Course created"}));

        app.process(create_course()).unwrap();
        let completion = next_completion(&mut app);
        app.complete(completion).unwrap();

        assert_eq!(app.route, Route::Courses);
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.text, "Course created");
    }

    #[test]
    fn test_stale_mutation_only_notifies() {
        let (mut app, transport) = app(Route::NewCourse);
        app.process(Action::LoggedIn(admin())).unwrap();
        transport.respond(200, json!({"data": {}, "message": ""}));

        app.process(create_course()).unwrap();
        let completion = next_completion(&mut app);

        // The user moved on before the reply arrived
        let elsewhere = Route::NewExam {
            chapter_id: "ch1".to_string(),
        };
        app.process(Action::Navigate(elsewhere.clone())).unwrap();
        app.complete(completion).unwrap();

        assert_eq!(app.route, elsewhere);
        assert_eq!(app.notice.clone().unwrap().text, DEFAULT_SUCCESS);
    }

    #[test]
    fn test_failed_mutation_shows_generic_error() {
        let (mut app, transport) = app(Route::NewCourse);
        app.process(Action::LoggedIn(admin())).unwrap();
        transport.respond(500, json!({"message": "database down"}));

        app.process(create_course()).unwrap();
        let completion = next_completion(&mut app);
        app.complete(completion).unwrap();

        assert_eq!(app.route, Route::NewCourse);
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "Failed to create course.");
    }

    #[test]
    fn test_confirmation_submits_pending_mutation() {
        let (mut app, _) = app(Route::NewCourse);
        app.process(Action::LoggedIn(admin())).unwrap();
        let pending = PendingMutation::DeleteExam {
            exam_id: "e1".to_string(),
            name: "Quiz".to_string(),
        };

        app.update(Action::AskConfirm(pending.clone())).unwrap();
        let action = app.handle_key_event(key(KeyCode::Char('y'))).unwrap();
        assert_eq!(action, Some(Action::ConfirmModal));
        assert_eq!(
            app.update(Action::ConfirmModal).unwrap(),
            Some(Action::Submit(Mutation::Confirmed(pending)))
        );
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_quit_dialog_and_force_quit() {
        let (mut app, _) = app(Route::Login);
        app.process(Action::OpenQuitDialog).unwrap();
        let action = app.handle_key_event(key(KeyCode::Char('n'))).unwrap();
        app.process(action.unwrap()).unwrap();
        assert!(!app.should_quit);

        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        app.process(action.unwrap()).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_chapter_dialog_submit_closes_modal() {
        let (mut app, _) = app(Route::NewCourse);
        app.process(Action::LoggedIn(admin())).unwrap();
        app.process(Action::OpenChapterForm {
            course_id: "c1".to_string(),
            chapter: None,
        })
        .unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::ChapterForm));

        for c in "Kana".chars() {
            app.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
        let save = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let action = app.handle_key_event(save).unwrap().unwrap();
        assert!(matches!(action, Action::Submit(Mutation::CreateChapter(_))));

        app.process(action).unwrap();
        assert!(app.modals.is_empty());
        assert!(app.runner.is_busy());
    }
}
