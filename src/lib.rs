pub mod bitboard;
pub mod board;
pub mod error;
pub mod field;
pub mod line;
mod render;
pub mod solution;
pub mod solver;

#[cfg(feature = "serde")]
pub mod serde_support;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn queens_no_three(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_class::<PySolver>()?;
    m.add_class::<PySolution>()?;
    m.add_function(wrap_pyfunction!(py_find_solution, m)?)?;
    m.add("MAX_SIZE", MAX_PYTHON_SIZE)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::solution::Solution;
    use crate::solver::{CollinearityCheck, Solver, SolverOptions};

    /// Largest board accepted from Python.
    pub const MAX_PYTHON_SIZE: usize = 64;

    fn check_size(size: usize) -> PyResult<u16> {
        if !(1..=MAX_PYTHON_SIZE).contains(&size) {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Board size must be between 1 and {}",
                MAX_PYTHON_SIZE
            )));
        }
        Ok(size as u16)
    }

    fn parse_collinearity(name: &str) -> PyResult<CollinearityCheck> {
        match name {
            "exact" => Ok(CollinearityCheck::Exact),
            "tolerance" => Ok(CollinearityCheck::Tolerance),
            _ => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Unknown collinearity check '{}', expected 'exact' or 'tolerance'",
                name
            ))),
        }
    }

    #[pyclass(name = "Solution")]
    #[derive(Clone)]
    pub struct PySolution {
        solution: Solution,
    }

    #[pymethods]
    impl PySolution {
        pub fn size(&self) -> usize {
            self.solution.size() as usize
        }

        /// Row of the queen in each column.
        pub fn rows(&self) -> Vec<usize> {
            self.solution
                .rows()
                .into_iter()
                .map(|r| r as usize)
                .collect()
        }

        /// `(column, row)` of each queen.
        pub fn fields(&self) -> Vec<(usize, usize)> {
            self.solution
                .fields()
                .iter()
                .map(|f| (f.column() as usize, f.row() as usize))
                .collect()
        }

        pub fn __len__(&self) -> usize {
            self.solution.fields().len()
        }

        pub fn __str__(&self) -> String {
            self.solution.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Solution(size={}, rows={:?})",
                self.solution.size(),
                self.solution.rows()
            )
        }
    }

    #[pyclass(name = "Solver")]
    pub struct PySolver {
        solver: Solver,
    }

    #[pymethods]
    impl PySolver {
        #[new]
        #[pyo3(signature = (size, collinearity = "exact"))]
        pub fn new(size: usize, collinearity: &str) -> PyResult<Self> {
            let size = check_size(size)?;
            let options =
                SolverOptions::default().with_collinearity(parse_collinearity(collinearity)?);
            Ok(PySolver {
                solver: Solver::with_options(size, options),
            })
        }

        pub fn size(&self) -> usize {
            self.solver.size() as usize
        }

        pub fn find_solution(&mut self) -> Option<PySolution> {
            self.solver
                .find_solution()
                .map(|solution| PySolution { solution })
        }

        /// `(commits, backtracks, attack_rejections, collinear_rejections)` of
        /// the last search.
        pub fn stats(&self) -> (u64, u64, u64, u64) {
            let s = self.solver.stats();
            (
                s.commits,
                s.backtracks,
                s.attack_rejections,
                s.collinear_rejections,
            )
        }

        pub fn __repr__(&self) -> String {
            format!("Solver(size={})", self.solver.size())
        }
    }

    #[pyfunction]
    #[pyo3(name = "find_solution")]
    pub fn py_find_solution(size: usize) -> PyResult<Option<PySolution>> {
        let size = check_size(size)?;
        Ok(crate::solver::find_solution(size).map(|solution| PySolution { solution }))
    }
}
