mod parm;
