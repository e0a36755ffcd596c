pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod function {
        pub mod functionpoint;
        pub mod functionerror;
        pub mod function;
        pub mod functions;

        pub mod basic {
            pub mod exp;
            pub mod log;
            pub mod trigonometricfunction;
        }

        pub mod meta {
            pub mod shift;
            pub mod scale;
            pub mod power;
            pub mod sum;
            pub mod mult;
            pub mod composition;
        }
    }

    pub mod tabulated {
        pub mod tabulatedfunction;
        pub mod arraytabulatedfunction;
        pub mod linkedtabulatedfunction;
        pub mod tabulatedfunctionfactory;
        pub mod tabulatedfunctions;
        pub mod functiontypemanager;
        pub mod tabulatedfunctionio;

        #[cfg(test)]
        mod proptests;
    }

    pub mod integration {
        pub mod trapezoid;
    }
}

pub mod tasks {
    pub mod integrationtask;
    pub mod taskgenerator;
    pub mod taskintegrator;
}
