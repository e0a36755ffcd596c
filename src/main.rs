use std::sync::Arc;

use tabfun::configuration::Configuration;
use tabfun::manager::manager::IManager;
use tabfun::math::function::basic::exp::Exp;
use tabfun::math::function::basic::log::Log;
use tabfun::math::function::function::Function;
use tabfun::math::function::functionerror::FunctionError;
use tabfun::math::function::functionpoint::FunctionPoint;
use tabfun::math::function::functions;
use tabfun::math::integration::trapezoid::integrate;
use tabfun::math::tabulated::functiontypemanager::{
    analytic_function,
    tabulate_of_type,
    FunctionTypeManager
};
use tabfun::math::tabulated::tabulatedfunction::TabulatedStorage;
use tabfun::tasks::taskintegrator::run_tasks;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Configuration::new();
    if let Some(config_path) = std::env::args().nth(1) {
        config.from_reader(&config_path)?;
    }

    let points = [
        FunctionPoint::new(0.0, 0.0),
        FunctionPoint::new(5.0, 25.0),
        FunctionPoint::new(10.0, 100.0)
    ];
    let mut parabola = config.tabulated_functions().create_tabulated_function_from_points(&points)?;
    println!("{} f(2.5) = {}", parabola, parabola.value(2.5));
    if let Err(FunctionError::DuplicateX(x)) = parabola.add_point(FunctionPoint::new(5.0, 0.0)) {
        println!("rejected duplicate x = {x}");
    }

    let exp: Arc<dyn Function> = Arc::new(Exp::new());
    let ln: Arc<dyn Function> = Arc::new(Log::new(std::f64::consts::E)?);
    let identity = functions::composition(exp.clone(), ln);
    let tree = functions::sum(functions::power(exp, 2.0), functions::scale(identity, 2.0, 1.0));
    println!("e^2x + x/2 at 1.0 = {}", tree.value(1.0));

    config.tabulated_functions().set_tabulated_function_factory(TabulatedStorage::Linked.factory());
    let manager = config.function_type_manager();
    let sin = analytic_function(&manager, "Sin")?;
    let tabulated_sin = config.tabulated_functions().tabulate(sin.as_ref(), 0.0, std::f64::consts::PI, 11)?;
    let array_sin = tabulate_of_type(&manager, FunctionTypeManager::ARRAY, sin.as_ref(), 0.0, std::f64::consts::PI, 11)?;
    println!("{:?} tabulation equals {:?} tabulation: {}",
             tabulated_sin.storage(),
             array_sin.storage(),
             *tabulated_sin == *array_sin);
    println!("registered types: {}", manager.names().join(", "));

    let area = integrate(&tabulated_sin, 0.0, std::f64::consts::PI, 0.01)?;
    println!("integral of tabulated sin over [0, pi] = {area:.6}");

    for outcome in run_tasks(5, 42)? {
        let task = outcome.task();
        match outcome.result() {
            Ok(integral) => println!("Result {:.4} {:.4} {:.4} {:.8}", task.left_x(), task.right_x(), task.step(), integral),
            Err(error) => println!("rejected task: {error}")
        }
    }
    Ok(())
}
