use crate::plot::axes::Axes;
use crate::plot::figure::Figure;
use pyo3::prelude::*;
use pyo3::types::PyDict;

// non-interactive backend: charts are only ever written to files
const BACKEND: &str = "Agg";

pub struct PyPlot<'p> {
    plt: &'p PyModule,
}

impl<'p> PyPlot<'p> {
    pub fn new(py: Python<'p>) -> PyResult<Self> {
        // the backend must be selected before `pyplot` is imported
        let matplotlib = PyModule::import(py, "matplotlib")?;
        matplotlib.call_method1("use", (BACKEND,))?;
        let plt = PyModule::import(py, "matplotlib.pyplot")?;
        Ok(Self { plt })
    }

    pub fn subplots(
        &self,
        kwargs: Option<&PyDict>,
    ) -> PyResult<(Figure<'_>, Axes<'_>)> {
        // check that `ncols` and `nrows` was not set
        if let Some(kwargs) = kwargs {
            assert!(
                kwargs.get_item("ncols").is_none(),
                "ncols shouldn't be set here; the chart has a single plot"
            );
            assert!(
                kwargs.get_item("nrows").is_none(),
                "nrows shouldn't be set here; the chart has a single plot"
            );
        }
        let result = self.plt.call_method("subplots", (), kwargs)?;
        let (fig, ax): (&PyAny, &PyAny) = result.extract()?;
        Ok((Figure::new(fig), Axes::new(ax)))
    }

    pub fn tight_layout(&self) -> PyResult<()> {
        self.plt.call_method0("tight_layout")?;
        Ok(())
    }

    pub fn savefig(&self, path: &str, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.plt.call_method("savefig", (path,), kwargs)?;
        Ok(())
    }

    pub fn close(&self, figure: Figure<'_>) -> PyResult<()> {
        self.plt.call_method1("close", (figure.fig(),))?;
        Ok(())
    }
}
