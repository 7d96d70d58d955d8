// State: the context swaps its state object instead of branching on flags.

pub trait State {
    fn is_authorized(&self, context: &Context) -> bool;
    fn user_id(&self, context: &Context) -> Option<String>;
}

struct UnauthorizedState;

impl State for UnauthorizedState {
    fn is_authorized(&self, _context: &Context) -> bool {
        false
    }

    fn user_id(&self, _context: &Context) -> Option<String> {
        None
    }
}

struct AuthorizedState {
    user_id: String,
}

impl State for AuthorizedState {
    fn is_authorized(&self, _context: &Context) -> bool {
        true
    }

    fn user_id(&self, _context: &Context) -> Option<String> {
        Some(self.user_id.clone())
    }
}

pub struct Context {
    state: Box<dyn State>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            state: Box::new(UnauthorizedState),
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authorized(&self) -> bool {
        self.state.is_authorized(self)
    }

    pub fn user_id(&self) -> Option<String> {
        self.state.user_id(self)
    }

    pub fn change_state_to_authorized(&mut self, user_id: impl Into<String>) {
        self.state = Box::new(AuthorizedState {
            user_id: user_id.into(),
        });
    }

    pub fn change_state_to_unauthorized(&mut self) {
        self.state = Box::new(UnauthorizedState);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout_cycle() {
        let mut context = Context::new();
        assert_eq!((context.is_authorized(), context.user_id()), (false, None));

        context.change_state_to_authorized("admin");
        assert_eq!(
            (context.is_authorized(), context.user_id()),
            (true, Some("admin".to_string()))
        );

        context.change_state_to_unauthorized();
        assert_eq!((context.is_authorized(), context.user_id()), (false, None));
    }

    #[test]
    fn test_reauthorize_replaces_user() {
        let mut context = Context::new();
        context.change_state_to_authorized("admin");
        context.change_state_to_authorized("guest");
        assert_eq!(context.user_id().as_deref(), Some("guest"));
    }
}
