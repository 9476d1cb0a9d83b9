use anyhow::anyhow;

/// Connected state of a mocked driven port. Ports configured as [Connectivity::Down]
/// fail every call the way a lost database connection would.
pub enum Connectivity {
    Up,
    Down,
}

impl Connectivity {
    /// Return an error if the port is configured to be down
    pub fn fail_if_down(&self) -> Result<(), anyhow::Error> {
        match self {
            Self::Up => Ok(()),
            Self::Down => Err(anyhow!("could not reach the database!")),
        }
    }
}

/// Drop-in property for mocking one async trait function: captures the
/// arguments of every call and hands back a preconfigured return value.
/// Exists because popular mocking crates still don't play well with async
/// functions on traits. Mock trait implementations go on `Mutex<TheMock>` so
/// call capture can happen through `&self`.
pub struct FakeImplementation<Args, Ret> {
    saved_arguments: Vec<Args>,
    return_value: Option<Ret>,
}

impl<Args, Ret> FakeImplementation<Args, Ret> {
    pub fn new() -> FakeImplementation<Args, Ret> {
        FakeImplementation {
            saved_arguments: Vec::new(),
            return_value: None,
        }
    }

    /// Saves the arguments from a single invocation
    pub fn save_arguments(&mut self, arguments: Args) {
        self.saved_arguments.push(arguments)
    }

    /// The arguments passed on every call so far, in call order
    pub fn calls(&self) -> &[Args] {
        self.saved_arguments.as_slice()
    }
}

impl<Args, Success, Fail> FakeImplementation<Args, Result<Success, Fail>>
where
    Success: Clone,
    Fail: Clone,
{
    /// Set the result to hand back on invocation. [Result] itself isn't [Clone],
    /// so this requires cloneable contents.
    pub fn set_returned_result(&mut self, return_value: Result<Success, Fail>) {
        self.return_value = Some(return_value);
    }

    /// Retrieve the configured result for an invocation
    pub fn return_value_result(&self) -> Result<Success, Fail> {
        match self.return_value {
            Some(Ok(ref ok_result)) => Ok(ok_result.clone()),
            Some(Err(ref err)) => Err(err.clone()),
            None => panic!("Tried to return from a function where the return value wasn't set!"),
        }
    }
}

impl<Args, Success> FakeImplementation<Args, anyhow::Result<Success>>
where
    Success: Clone,
{
    /// Like [Self::set_returned_result], but for [anyhow::Result], whose error
    /// type isn't [Clone]. The error is captured via its message.
    pub fn set_returned_anyhow(&mut self, return_value: anyhow::Result<Success>) {
        match return_value {
            Ok(ok_result) => self.return_value = Some(Ok(ok_result)),
            Err(err) => self.return_value = Some(Err(anyhow!(format!("{}", err)))),
        }
    }

    /// Retrieve the configured result for an invocation (for [anyhow::Result]s)
    pub fn return_value_anyhow(&self) -> anyhow::Result<Success> {
        match self.return_value {
            Some(Ok(ref ok_result)) => Ok(ok_result.clone()),
            Some(Err(ref err)) => Err(anyhow!(format!("{}", err))),
            None => panic!("Tried to return from a function where the return value wasn't set!"),
        }
    }
}
