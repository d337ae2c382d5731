#![forbid(unsafe_code)]

pub mod browser;
pub mod content;
pub mod error;
pub mod model;
pub mod narrative;
pub mod quiz;
pub mod scoring;
pub mod time;

pub use error::Error;
pub use time::Clock;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{Catalog, Category, DimensionDef, Progress, QUESTIONS_PER_DIMENSION};
    use crate::quiz::QuizSession;

    fn dim(name: &str) -> DimensionDef {
        let questions = (1..=QUESTIONS_PER_DIMENSION)
            .map(|i| format!("{name} 第{i}题"))
            .collect();
        DimensionDef::new(name, "☰", format!("{name} 描述"), questions).unwrap()
    }

    /// Three natures (紫薇, 天机, 太阳) and two personalities (君主, 谋士).
    pub fn small_catalog() -> Catalog {
        Catalog::new(
            vec![dim("紫薇"), dim("天机"), dim("太阳")],
            vec![dim("君主"), dim("谋士")],
        )
        .unwrap()
    }

    pub fn answer_all(
        session: &mut QuizSession,
        catalog: &Catalog,
        progress: &mut Progress,
        category: Category,
        name: &str,
        answers: &[bool],
    ) {
        session.start_dimension(catalog, category, name).unwrap();
        for value in answers {
            session.submit_answer(progress, *value).unwrap();
        }
    }
}
