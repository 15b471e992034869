use pyo3::prelude::*;
use pyo3::types::PyDict;

// https://matplotlib.org/stable/api/axes_api.html
pub struct Axes<'a> {
    ax: &'a PyAny,
}

impl<'a> Axes<'a> {
    pub fn new(ax: &'a PyAny) -> Self {
        Self { ax }
    }

    pub fn set_title(
        &self,
        title: &str,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()> {
        self.ax.call_method("set_title", (title,), kwargs)?;
        Ok(())
    }

    pub fn set_xlabel(
        &self,
        label: &str,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()> {
        self.ax.call_method("set_xlabel", (label,), kwargs)?;
        Ok(())
    }

    pub fn set_ylabel(
        &self,
        label: &str,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()> {
        self.ax.call_method("set_ylabel", (label,), kwargs)?;
        Ok(())
    }

    pub fn set_xticks<T>(&self, ticks: Vec<T>) -> PyResult<()>
    where
        T: IntoPy<PyObject>,
    {
        self.ax.call_method1("set_xticks", (ticks,))?;
        Ok(())
    }

    pub fn set_xticklabels<L>(
        &self,
        labels: Vec<L>,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()>
    where
        L: IntoPy<PyObject>,
    {
        self.ax.call_method("set_xticklabels", (labels,), kwargs)?;
        Ok(())
    }

    pub fn set_yticks<T>(&self, ticks: Vec<T>) -> PyResult<()>
    where
        T: IntoPy<PyObject>,
    {
        self.ax.call_method1("set_yticks", (ticks,))?;
        Ok(())
    }

    pub fn set_yticklabels<L>(&self, labels: Vec<L>) -> PyResult<()>
    where
        L: IntoPy<PyObject>,
    {
        self.ax.call_method1("set_yticklabels", (labels,))?;
        Ok(())
    }

    pub fn set_ylim(&self, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.ax.call_method("set_ylim", (), kwargs)?;
        Ok(())
    }

    /// Draws the y axis grid lines, behind any other artist.
    pub fn ygrid(&self, kwargs: Option<&PyDict>) -> PyResult<()> {
        let yaxis = self.ax.getattr("yaxis")?;
        yaxis.call_method("grid", (true,), kwargs)?;
        self.ax.call_method1("set_axisbelow", (true,))?;
        Ok(())
    }

    pub fn legend(&self, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.ax.call_method("legend", (), kwargs)?;
        Ok(())
    }

    pub fn bar<X, H>(
        &self,
        x: Vec<X>,
        height: Vec<H>,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()>
    where
        X: IntoPy<PyObject>,
        H: IntoPy<PyObject>,
    {
        self.ax.call_method("bar", (x, height), kwargs)?;
        Ok(())
    }

    pub fn annotate(
        &self,
        text: &str,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()> {
        self.ax.call_method("annotate", (text,), kwargs)?;
        Ok(())
    }

    pub fn axhline(&self, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.ax.call_method("axhline", (), kwargs)?;
        Ok(())
    }
}
