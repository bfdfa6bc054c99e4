//! Strategy, command and template-method shapes built from closures.
//!
//! Each pattern hinges on a single-method trait with a blanket impl for the
//! matching closure type, so a named struct and an inline closure are
//! interchangeable wherever the trait is expected.

use std::cell::RefCell;

use crate::error::LoanError;

// Strategy

pub trait NextMoveStrategy {
    fn next_move(&self, board: &str) -> Option<String>;
}

impl<F> NextMoveStrategy for F
where
    F: Fn(&str) -> Option<String>,
{
    fn next_move(&self, board: &str) -> Option<String> {
        self(board)
    }
}

/// Picks the heaviest move from a board written as `move:weight,move:weight`.
/// Entries that do not parse are ignored; ties go to the first.
pub struct MaxWeightStrategy;

impl NextMoveStrategy for MaxWeightStrategy {
    fn next_move(&self, board: &str) -> Option<String> {
        board
            .split(',')
            .filter_map(|entry| {
                let (mv, weight) = entry.split_once(':')?;
                Some((mv.trim(), weight.trim().parse::<i64>().ok()?))
            })
            .fold(None::<(&str, i64)>, |best, (mv, w)| match best {
                Some((_, bw)) if bw >= w => best,
                _ => Some((mv, w)),
            })
            .map(|(mv, _)| mv.to_string())
    }
}

pub struct Solver<S> {
    strategy: S,
}

impl<S: NextMoveStrategy> Solver<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn solve(&self, board: &str) -> Option<String> {
        let mv = self.strategy.next_move(board);
        tracing::debug!(board, ?mv, "solved");
        mv
    }
}

// Command

pub trait Action {
    fn perform(&mut self);
}

impl<F: FnMut()> Action for F {
    fn perform(&mut self) {
        self()
    }
}

/// Runs queued actions in the order they were added.
#[derive(Default)]
pub struct Processor<'a> {
    actions: Vec<Box<dyn Action + 'a>>,
}

impl<'a> Processor<'a> {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn add_action(&mut self, action: impl Action + 'a) -> &mut Self {
        self.actions.push(Box::new(action));
        self
    }

    pub fn process_chain(&mut self) {
        self.actions.iter_mut().for_each(|a| a.perform());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

/// Records the data-set operations it was asked to perform.
#[derive(Default)]
pub struct Dao {
    log: RefCell<Vec<Operation>>,
}

impl Dao {
    fn record(&self, op: Operation) {
        tracing::info!(?op, "data set");
        self.log.borrow_mut().push(op);
    }

    pub fn create(&self) {
        self.record(Operation::Create);
    }

    pub fn update(&self) {
        self.record(Operation::Update);
    }

    pub fn delete(&self) {
        self.record(Operation::Delete);
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.log.borrow().clone()
    }
}

// Template method

pub type Criteria<'a> = Box<dyn Fn() -> Result<(), LoanError> + 'a>;

/// Fixed checking sequence with pluggable steps.
pub struct LoanApplication<'a> {
    identity: Criteria<'a>,
    credit_history: Criteria<'a>,
    income_history: Criteria<'a>,
}

impl<'a> LoanApplication<'a> {
    pub fn new(
        identity: impl Fn() -> Result<(), LoanError> + 'a,
        credit_history: impl Fn() -> Result<(), LoanError> + 'a,
        income_history: impl Fn() -> Result<(), LoanError> + 'a,
    ) -> Self {
        Self {
            identity: Box::new(identity),
            credit_history: Box::new(credit_history),
            income_history: Box::new(income_history),
        }
    }

    pub fn for_company(company: &'a Company) -> Self {
        Self::new(
            move || company.check_identity(),
            move || company.check_historical_debt(),
            move || company.check_profit_and_loss(),
        )
    }

    /// Stops at the first failing criterion.
    pub fn check(&self) -> Result<(), LoanError> {
        (self.identity)()?;
        (self.credit_history)()?;
        (self.income_history)()?;
        self.report_findings();
        Ok(())
    }

    fn report_findings(&self) {
        tracing::info!("loan application passed all checks");
    }
}

#[derive(Clone, Debug, Default)]
pub struct Company {
    pub identity_verified: bool,
    pub outstanding_debt: u64,
    pub profit: i64,
}

impl Company {
    pub fn check_identity(&self) -> Result<(), LoanError> {
        if self.identity_verified { Ok(()) } else { Err(LoanError::Identity) }
    }

    pub fn check_historical_debt(&self) -> Result<(), LoanError> {
        match self.outstanding_debt {
            0 => Ok(()),
            debt => Err(LoanError::HistoricalDebt(debt)),
        }
    }

    pub fn check_profit_and_loss(&self) -> Result<(), LoanError> {
        if self.profit >= 0 { Ok(()) } else { Err(LoanError::ProfitAndLoss(-self.profit)) }
    }
}
