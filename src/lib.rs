pub mod application;

pub mod experiment {
    pub mod experimentplan;
    pub mod experimentresult;
    pub mod experimentrunner;
}

pub mod interval {
    pub mod interval;
    pub mod intervalerror;
    pub mod intervalreader;
}

pub mod logging;

pub mod math {
    pub mod quadrature {
        pub mod quadraturerule;
        pub mod quadratureengine;
    }
}

pub mod report {
    pub mod reporter;
}
