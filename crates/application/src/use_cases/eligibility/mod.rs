mod check;

pub use check::CheckEligibilityUseCase;
